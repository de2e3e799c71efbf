//! Property tests for sassdoc-client
//!
//! These tests drive the page controller over an in-memory document.

use proptest::prelude::*;
use sassdoc_client::{
    ClientOptions, Dom, MemoryDom, MemoryElement, NodeId, SearchOutcome, ThemeController,
};
use sassdoc_search::{DocEntry, DocType, IndexBuilder};

const GROUPS: [&str; 3] = ["nav-group--function", "nav-group--mixin", "nav-group--variable"];

struct Page {
    dom: MemoryDom,
    results: NodeId,
    /// Group index for every navigation element.
    nav: Vec<(NodeId, usize)>,
}

fn page() -> Page {
    let mut dom = MemoryDom::new();
    dom.append(MemoryElement::new("input").with_id("search"));
    let results = dom.append(
        MemoryElement::new("div")
            .with_id("search-results")
            .with_classes("search-form__results search-form__results--hidden"),
    );
    let mut nav = Vec::new();
    for (g, group) in GROUPS.iter().enumerate() {
        let header = dom.append(
            MemoryElement::new("h3")
                .with_classes("nav-group__header")
                .with_attribute("data-toggles", *group),
        );
        nav.push((header, g));
        for _ in 0..2 {
            let item = dom.append(
                MemoryElement::new("ul").with_classes(&format!("nav-group__items {group}")),
            );
            nav.push((item, g));
        }
    }
    Page { dom, results, nav }
}

fn index_json() -> String {
    let mut builder = IndexBuilder::new();
    for (ty, name) in [
        (DocType::Function, "foo"),
        (DocType::Mixin, "foo-bar"),
        (DocType::Mixin, "button"),
        (DocType::Variable, "primary-color"),
        (DocType::Placeholder, "card"),
    ] {
        builder.add(&DocEntry::new(ty, name)).unwrap();
    }
    builder.build().to_json().unwrap()
}

fn snapshot(dom: &MemoryDom, nodes: &[(NodeId, usize)]) -> Vec<String> {
    nodes.iter().map(|(n, _)| dom.class_name(*n)).collect()
}

// ============================================================
// Search
// ============================================================

proptest! {
    // Empty input after any sequence of searches leaves the container hidden.
    #[test]
    fn empty_input_resets(queries in prop::collection::vec("[a-z~^*:+ -]{0,10}", 0..6)) {
        let mut p = page();
        let json = index_json();
        let mut theme = ThemeController::new(&mut p.dom, &json, ClientOptions::default()).unwrap();
        for q in &queries {
            theme.on_input_value(q).unwrap();
        }
        prop_assert_eq!(theme.on_input_value("").unwrap(), SearchOutcome::Reset);
        drop(theme);
        prop_assert!(p.dom.has_class(&p.results, "search-form__results--hidden"));
    }

    // Visibility always agrees with the outcome.
    #[test]
    fn visibility_matches_outcome(query in "[a-z-]{1,10}") {
        let mut p = page();
        let json = index_json();
        let mut theme = ThemeController::new(&mut p.dom, &json, ClientOptions::default()).unwrap();
        let outcome = theme.on_input_value(&query).unwrap();
        drop(theme);
        let hidden = p.dom.has_class(&p.results, "search-form__results--hidden");
        match outcome {
            SearchOutcome::Shown(n) => {
                prop_assert!(n > 0);
                prop_assert!(!hidden);
            }
            SearchOutcome::NoResults | SearchOutcome::Reset => prop_assert!(hidden),
        }
    }
}

// ============================================================
// Toggles
// ============================================================

proptest! {
    // Triggering a header twice restores every class list.
    #[test]
    fn toggle_is_an_involution(
        prefix in prop::collection::vec(0usize..3, 0..5),
        header in 0usize..3,
    ) {
        let mut p = page();
        let json = index_json();
        let nav = p.nav.clone();
        let mut theme = ThemeController::new(&mut p.dom, &json, ClientOptions::default()).unwrap();
        for h in &prefix {
            theme.on_toggle(*h).unwrap();
        }
        let before = snapshot(theme.dom(), &nav);
        theme.on_toggle(header).unwrap();
        theme.on_toggle(header).unwrap();
        prop_assert_eq!(snapshot(theme.dom(), &nav), before);
    }

    // A trigger changes its own group and nothing else.
    #[test]
    fn groups_are_isolated(header in 0usize..3) {
        let mut p = page();
        let json = index_json();
        let nav = p.nav.clone();
        let before = snapshot(&p.dom, &nav);

        let mut theme = ThemeController::new(&mut p.dom, &json, ClientOptions::default()).unwrap();
        theme.on_toggle(header).unwrap();
        let after = snapshot(theme.dom(), &nav);

        for (i, (_, group)) in nav.iter().enumerate() {
            if *group == header {
                prop_assert_ne!(&after[i], &before[i]);
                prop_assert!(after[i].ends_with("--collapsed"));
            } else {
                prop_assert_eq!(&after[i], &before[i]);
            }
        }
    }
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn foo_scenario_renders_ranked_links() {
    let mut p = page();
    let json = index_json();
    let mut theme = ThemeController::new(&mut p.dom, &json, ClientOptions::default()).unwrap();
    assert!(matches!(theme.on_input_value("foo"), Ok(SearchOutcome::Shown(_))));
    drop(theme);

    let html = &p.dom.get(p.results).inner_html;
    let first = html.find(r##"<a href="#function-foo"><span>fun</span><span>foo</span></a>"##);
    let second = html.find(r##"<a href="#mixin-foo-bar"><span>mix</span><span>foo-bar</span></a>"##);
    assert!(first.is_some() && second.is_some(), "{html}");
    assert!(first < second);
}

#[test]
fn no_match_scenario_hides_results() {
    let mut p = page();
    let json = index_json();
    let mut theme = ThemeController::new(&mut p.dom, &json, ClientOptions::default()).unwrap();
    assert_eq!(theme.on_input_value("zzz999").unwrap(), SearchOutcome::NoResults);
    drop(theme);
    assert!(p.dom.has_class(&p.results, "search-form__results--hidden"));
}
