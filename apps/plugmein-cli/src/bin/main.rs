use anyhow::{anyhow, bail, Context};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use plugmein_board::{GigBoard, GigDraft, Profile, Thread};
use plugmein_core::catalog::{Catalog, ALL_TAGS};
use plugmein_core::config::{resolve_with_base, Config, Settings};
use plugmein_core::types::Role;
use plugmein_feed::{FeedRanker, FilterConfig, ScoreWeights};

const USAGE: &str = "Usage: plugmein <discover|gigs|post-gig|messages|profile|tags> [options]
  discover  [--radius N] [--role R] [--paid-only] [--search TEXT] [--tag T]... [--json] [--data DIR]
  gigs      [--data DIR]
  post-gig  --title T [--org O] [--paid] [--rate R] [--city C] [--tags \"a, b\"] [--description D] [--distance N] [--data DIR]
  messages  [--send TEXT]
  profile   [--hide] [--no-location]
  tags";

/// Parsed `--name value` pairs and bare `--switch` flags.
#[derive(Debug, Default)]
struct Options {
    values: Vec<(String, String)>,
    switches: HashSet<String>,
}

impl Options {
    fn parse(args: &[String], switches: &[&str]) -> anyhow::Result<Self> {
        let mut opts = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let name = arg
                .strip_prefix("--")
                .ok_or_else(|| anyhow!("unexpected argument '{}'", arg))?;
            if switches.contains(&name) {
                opts.switches.insert(name.to_string());
                continue;
            }
            let value = iter.next().ok_or_else(|| anyhow!("option --{} needs a value", name))?;
            opts.values.push((name.to_string(), value.clone()));
        }
        Ok(opts)
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.values.iter().rev().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    fn all(&self, name: &str) -> Vec<String> {
        self.values.iter().filter(|(k, _)| k == name).map(|(_, v)| v.clone()).collect()
    }

    fn flag(&self, name: &str) -> bool {
        self.switches.contains(name)
    }

    fn expect_only(&self, known: &[&str]) -> anyhow::Result<()> {
        match self.values.iter().find(|(k, _)| !known.contains(&k.as_str())) {
            Some((k, _)) => bail!("unknown option --{}", k),
            None => Ok(()),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    args.remove(0);
    if args.is_empty() {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn load_catalog(opts: &Options, settings: &Settings, base: &Path) -> anyhow::Result<Catalog> {
    let dir: Option<PathBuf> = match opts.get("data") {
        Some(d) => Some(resolve_with_base(base, d)),
        None => settings.catalog_dir(base),
    };
    match dir {
        Some(dir) => {
            info!(dir = %dir.display(), "loading catalog");
            Catalog::load_dir(&dir).with_context(|| format!("loading catalog from {}", dir.display()))
        }
        None => Ok(Catalog::seed()),
    }
}

fn filter_from(opts: &Options, settings: &Settings) -> anyhow::Result<FilterConfig> {
    let mut filter = FilterConfig::default().with_radius(settings.feed.default_radius);
    if let Some(r) = opts.get("radius") {
        let radius: u32 = r.parse().with_context(|| format!("invalid --radius '{}'", r))?;
        if radius > settings.feed.max_radius {
            warn!(radius, max = settings.feed.max_radius, "radius beyond the slider range");
        }
        filter = filter.with_radius(radius);
    }
    if let Some(role) = opts.get("role") {
        filter = filter.with_role(role);
    }
    if let Some(text) = opts.get("search") {
        filter = filter.with_search(text);
    }
    for tag in opts.all("tag") {
        filter.select_tag(&tag);
    }
    Ok(filter.with_paid_only(opts.flag("paid-only")))
}

fn print_feed(ranker: &FeedRanker, catalog: &Catalog, filter: &FilterConfig, json: bool) -> anyhow::Result<()> {
    let feed = ranker.rank_source(catalog, filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&feed)?);
        return Ok(());
    }
    if feed.is_empty() {
        println!("Nothing matches these filters.");
    }
    for item in &feed {
        println!("{}", item);
    }
    Ok(())
}

fn draft_from(opts: &Options) -> anyhow::Result<GigDraft> {
    let title = opts.get("title").ok_or_else(|| anyhow!("post-gig needs --title"))?;
    let distance = match opts.get("distance") {
        Some(d) => d.parse::<f64>().with_context(|| format!("invalid --distance '{}'", d))?,
        None => 0.0,
    };
    let text = |name: &str| opts.get(name).unwrap_or_default().to_string();
    Ok(GigDraft {
        title: title.to_string(),
        org: text("org"),
        paid: opts.flag("paid"),
        rate: text("rate"),
        city: text("city"),
        tags: text("tags"),
        description: text("description"),
        distance,
    })
}

fn run(cmd: &str, args: &[String]) -> anyhow::Result<()> {
    let config = Config::load()?;
    let settings = config.settings()?;
    let base = env::current_dir()?;
    let ranker = FeedRanker::new(ScoreWeights::from(&settings.feed));

    match cmd {
        "discover" => {
            let opts = Options::parse(args, &["paid-only", "json"])?;
            opts.expect_only(&["radius", "role", "search", "tag", "data"])?;
            let catalog = load_catalog(&opts, &settings, &base)?;
            let filter = filter_from(&opts, &settings)?;
            print_feed(&ranker, &catalog, &filter, opts.flag("json"))?;
        }
        "gigs" => {
            let opts = Options::parse(args, &[])?;
            opts.expect_only(&["data"])?;
            let catalog = load_catalog(&opts, &settings, &base)?;
            for gig in &catalog.gigs {
                let badge = if gig.paid { "Paid" } else { "Unpaid" };
                println!("{} · {} · {} • {} mi · {} · {}", gig.title, gig.org, gig.city, gig.distance, badge, gig.rate);
            }
        }
        "post-gig" => {
            let opts = Options::parse(args, &["paid"])?;
            opts.expect_only(&["title", "org", "rate", "city", "tags", "description", "distance", "data"])?;
            let mut catalog = load_catalog(&opts, &settings, &base)?;
            let mut board = GigBoard::for_catalog(&catalog);
            let posted = board.post(draft_from(&opts)?).clone();
            board.publish_into(&mut catalog);
            println!("Gig posted: {} ({})", posted.title, posted.id);
            println!();
            let filter = FilterConfig::default().with_radius(settings.feed.default_radius);
            print_feed(&ranker, &catalog, &filter, false)?;
        }
        "messages" => {
            let opts = Options::parse(args, &[])?;
            opts.expect_only(&["send"])?;
            let mut thread = Thread::seed();
            if let Some(body) = opts.get("send") {
                thread.send(body);
            }
            println!("{}", thread.title());
            for m in &thread.messages {
                println!("  {}", m);
            }
        }
        "profile" => {
            let opts = Options::parse(args, &["hide", "no-location"])?;
            opts.expect_only(&[])?;
            let mut profile = Profile::seed();
            if opts.flag("hide") {
                profile.set_visible(false);
            }
            if opts.flag("no-location") {
                profile.set_searchable_by_location(false);
            }
            println!("{}", profile);
        }
        "tags" => {
            println!("Tags: {}", ALL_TAGS.join(", "));
            let roles: Vec<&str> = Role::LISTED.iter().map(Role::as_str).collect();
            println!("Roles: any, {}", roles.join(", "));
        }
        other => bail!("unknown command '{}'", other),
    }
    Ok(())
}

fn main() {
    init_tracing();
    let (cmd, args) = parse_args();
    if let Err(e) = run(&cmd, &args) {
        eprintln!("Error: {:#}", e);
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugmein_feed::RoleFilter;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn options_collect_values_and_switches() {
        let opts = Options::parse(&args(&["--radius", "25", "--paid-only", "--tag", "dp", "--tag", "mua"]), &["paid-only"])
            .expect("parse");
        assert_eq!(opts.get("radius"), Some("25"));
        assert!(opts.flag("paid-only"));
        assert_eq!(opts.all("tag"), ["dp", "mua"]);
        assert!(opts.expect_only(&["radius", "tag"]).is_ok());
        assert!(opts.expect_only(&["radius"]).is_err());
    }

    #[test]
    fn missing_value_and_positional_are_errors() {
        assert!(Options::parse(&args(&["--radius"]), &[]).is_err());
        assert!(Options::parse(&args(&["stray"]), &[]).is_err());
    }

    #[test]
    fn filter_starts_from_settings_radius() {
        let settings = Settings::default();
        let opts = Options::parse(&args(&["--role", "Stylist", "--search", "Runway"]), &[]).expect("parse");
        let filter = filter_from(&opts, &settings).expect("filter");
        assert_eq!(filter.radius, 10);
        assert_eq!(filter.role, RoleFilter::Exact("Stylist".into()));
        assert_eq!(filter.search_text, "Runway");
        assert!(!filter.paid_only);
    }

    #[test]
    fn repeated_tag_stays_selected() {
        let opts = Options::parse(&args(&["--tag", "dp", "--tag", "dp", "--tag", "mua"]), &[]).expect("parse");
        let filter = filter_from(&opts, &Settings::default()).expect("filter");
        assert_eq!(filter.selected_tags, ["dp", "mua"]);
    }

    #[test]
    fn bad_radius_is_rejected() {
        let opts = Options::parse(&args(&["--radius", "ten"]), &[]).expect("parse");
        assert!(filter_from(&opts, &Settings::default()).is_err());
    }

    #[test]
    fn draft_needs_a_title() {
        assert!(draft_from(&Options::default()).is_err());
        let opts = Options::parse(&args(&["--title", "Shoot", "--paid", "--tags", "dp, gaffer"]), &["paid"]).expect("parse");
        let draft = draft_from(&opts).expect("draft");
        assert!(draft.paid);
        assert_eq!(draft.tags, "dp, gaffer");
        assert_eq!(draft.distance, 0.0);
    }
}
