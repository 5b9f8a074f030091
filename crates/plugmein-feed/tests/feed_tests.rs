use plugmein_core::catalog::Catalog;
use plugmein_core::types::{Gig, ItemKind, Person, Role};
use plugmein_feed::{rank, rank_source, FeedRanker, FilterConfig, ScoreWeights};

fn person(id: &str, role: Role, distance: f64) -> Person {
    Person {
        id: id.into(),
        name: format!("Person {id}"),
        role,
        city: "Portland, OR".into(),
        distance,
        tags: vec![],
        bio: String::new(),
    }
}

fn gig(id: &str, distance: f64, paid: bool) -> Gig {
    Gig {
        id: id.into(),
        title: format!("Gig {id}"),
        org: "Org".into(),
        city: "Portland, OR".into(),
        distance,
        paid,
        rate: String::new(),
        tags: vec![],
        description: String::new(),
    }
}

fn neutral() -> FilterConfig {
    FilterConfig::default().with_radius(10)
}

fn ids(items: &[plugmein_core::types::DisplayItem]) -> Vec<String> {
    items.iter().map(|i| i.candidate.id().to_string()).collect()
}

#[test]
fn blended_scenario_orders_by_shared_score() {
    let people = [person("p3", Role::Director, 3.0), person("p7", Role::Photographer, 7.0)];
    let gigs = [gig("g4", 4.0, true), gig("g9", 9.0, false)];

    let feed = rank(&people, &gigs, &neutral());

    assert_eq!(ids(&feed), ["g4", "p3", "p7", "g9"]);
    let scores: Vec<f64> = feed.iter().map(|i| i.score).collect();
    assert_eq!(scores, [106.0, 97.0, 93.0, 91.0]);
    let kinds: Vec<ItemKind> = feed.iter().map(|i| i.kind()).collect();
    assert_eq!(kinds, [ItemKind::Gig, ItemKind::Person, ItemKind::Person, ItemKind::Gig]);
}

#[test]
fn zero_radius_excludes_everything_at_positive_distance() {
    let catalog = Catalog::seed();
    let feed = rank_source(&catalog, &FilterConfig::default().with_radius(0));
    assert!(feed.is_empty());
}

#[test]
fn closer_person_ranks_first() {
    let people = [person("far", Role::Stylist, 7.0), person("near", Role::Stylist, 3.0)];
    assert_eq!(ids(&rank(&people, &[], &neutral())), ["near", "far"]);
}

#[test]
fn paid_gig_outranks_unpaid_at_same_distance() {
    let gigs = [gig("unpaid", 5.0, false), gig("paid", 5.0, true)];
    assert_eq!(ids(&rank(&[], &gigs, &neutral())), ["paid", "unpaid"]);
}

#[test]
fn ranking_is_idempotent() {
    let catalog = Catalog::seed();
    let cfg = FilterConfig::default().with_radius(50).with_search("portland");
    assert_eq!(rank_source(&catalog, &cfg), rank_source(&catalog, &cfg));
}

#[test]
fn dropping_tag_filter_never_shrinks_the_feed() {
    let catalog = Catalog::seed();
    let tagged = FilterConfig::default().with_radius(50).with_tags(["fashion", "dp"]);
    let untagged = tagged.clone().with_tags(Vec::<String>::new());

    let narrow = ids(&rank_source(&catalog, &tagged));
    let wide = ids(&rank_source(&catalog, &untagged));

    assert_eq!(narrow, ["g1", "p1"], "Nova has fashion, the night shoot needs a dp");
    assert_eq!(wide.len(), 5);
    assert!(narrow.iter().all(|id| wide.contains(id)));
}

#[test]
fn search_matches_role_in_any_case() {
    let catalog = Catalog::seed();
    for q in ["stylist", "STYLIST"] {
        let feed = rank_source(&catalog, &FilterConfig::default().with_radius(50).with_search(q));
        // Kita by role (89), the lookbook gig by its "stylist" tag (91)
        assert_eq!(ids(&feed), ["g2", "p3"], "query {q}");
    }
}

#[test]
fn role_filter_keeps_every_gig() {
    let catalog = Catalog::seed();
    let feed = rank_source(&catalog, &FilterConfig::default().with_radius(50).with_role("Director"));
    let people: Vec<&Person> = feed.iter().filter_map(|i| i.as_person()).collect();
    let gigs: Vec<&Gig> = feed.iter().filter_map(|i| i.as_gig()).collect();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].role, Role::Director);
    assert_eq!(gigs.len(), catalog.gigs.len());
}

#[test]
fn paid_only_keeps_every_person_in_radius() {
    let catalog = Catalog::seed();
    let feed = rank_source(&catalog, &FilterConfig::default().with_paid_only(true));
    assert_eq!(ids(&feed), ["g1", "p1", "p2"]);
}

#[test]
fn seed_feed_with_default_filters() {
    let catalog = Catalog::seed();
    let feed = rank_source(&catalog, &FilterConfig::default());
    // Kita at 11 mi is outside the default 10 mi radius
    assert_eq!(ids(&feed), ["g1", "p1", "p2", "g2"]);
}

#[test]
fn unknown_role_string_simply_matches_nobody() {
    let catalog = Catalog::seed();
    let feed = rank_source(&catalog, &FilterConfig::default().with_radius(50).with_role("Astronaut"));
    assert!(feed.iter().all(|i| i.kind() == ItemKind::Gig));
}

#[test]
fn ranker_weights_come_from_settings() {
    let settings = plugmein_core::config::FeedSettings { paid_boost: 0.0, ..Default::default() };
    let ranker = FeedRanker::new(ScoreWeights::from(&settings));
    let feed = ranker.rank(&[person("p", Role::Producer, 4.0)], &[gig("g", 4.0, true)], &neutral());
    assert_eq!(ids(&feed), ["p", "g"], "equal scores keep people first");
}
