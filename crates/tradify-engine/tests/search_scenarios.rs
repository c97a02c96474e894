use tradify_engine::{grid_listing, highlight, search_overlay, RatingFilter};
use tradify_types::{Product, Segment};

fn load_catalog() -> Vec<Product> {
    serde_json::from_str(include_str!("fixtures/catalog.json")).expect("valid fixture")
}

fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_blue_matches_by_name_and_by_benefit() {
    let catalog = load_catalog();
    let results = search_overlay(&catalog, "blue");
    assert_eq!(names(&results), vec!["Blue Widget", "Red Gadget"]);
}

#[test]
fn test_overlay_and_grid_disagree_on_empty_query() {
    let catalog = load_catalog();
    assert!(search_overlay(&catalog, "").is_empty());
    assert_eq!(grid_listing(&catalog, "", None).len(), catalog.len());
}

#[test]
fn test_every_included_product_satisfies_the_matching_rule() {
    let catalog = load_catalog();
    for query in ["e", "WIDGET", " finish", "proof", "zzz"] {
        let needle = query.trim().to_lowercase();
        let results = grid_listing(&catalog, query, None);

        for product in &catalog {
            let expected = product.name.to_lowercase().contains(&needle)
                || product
                    .benefits
                    .iter()
                    .any(|b| b.to_lowercase().contains(&needle));
            let included = results.iter().any(|p| p.id == product.id);
            assert_eq!(included, expected, "query {:?} product {}", query, product.name);
        }
    }
}

#[test]
fn test_top_rated_grid() {
    let catalog = load_catalog();
    let results = grid_listing(&catalog, "", Some(RatingFilter::exact(5.0)));
    assert_eq!(names(&results), vec!["Blue Widget", "Wireless Mouse"]);
}

#[test]
fn test_highlight_search_result_names() {
    let catalog = load_catalog();
    let rendered: Vec<String> = search_overlay(&catalog, "mouse")
        .into_iter()
        .map(|p| {
            highlight(&p.name, "mouse")
                .into_iter()
                .map(|Segment { text, emphasized }| {
                    if emphasized {
                        format!("[{}]", text)
                    } else {
                        text
                    }
                })
                .collect::<String>()
        })
        .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    Wireless [Mouse]
    [Mouse] Pad XL
    ");
}
