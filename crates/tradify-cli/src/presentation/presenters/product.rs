use crate::presentation::view_models::{
    Badge, CommandOutput, ProductDetailViewModel, ProductEntryViewModel, ProductListViewModel, Tip,
};
use tradify_types::Product;

pub fn present_product_entry(product: &Product) -> ProductEntryViewModel {
    ProductEntryViewModel {
        id: product.id.get(),
        name: product.name.clone(),
        rating: product.rating,
        stars: product.star_count(),
        benefits: product.benefits.clone(),
        image: product.image.clone(),
        affiliate_link: product.affiliate_link.clone(),
    }
}

pub fn present_product_list(
    products: &[&Product],
    query: &str,
    rating_filter: Option<f64>,
) -> CommandOutput<ProductListViewModel> {
    let query = query.trim();
    let content = ProductListViewModel {
        query: (!query.is_empty()).then(|| query.to_string()),
        rating_filter,
        total_count: products.len(),
        products: products.iter().map(|p| present_product_entry(p)).collect(),
    };

    let mut result = CommandOutput::new(content);

    if products.is_empty() {
        result = result
            .with_badge(Badge::warning("No products match"))
            .with_tip(Tip::new("List the whole catalog").with_command("tradify products"));
    } else if rating_filter.is_none() {
        result = result.with_tip(
            Tip::new("Only show top picks").with_command("tradify products --top-rated"),
        );
    }

    result
}

pub fn present_product_detail(product: &Product) -> CommandOutput<ProductDetailViewModel> {
    CommandOutput::new(ProductDetailViewModel {
        product: present_product_entry(product),
    })
}
