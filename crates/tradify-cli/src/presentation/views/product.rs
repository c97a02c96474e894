use std::fmt;

use crate::presentation::formatters::{TextStyle, format_rating, stars, truncate};
use crate::presentation::view_models::{
    ProductDetailViewModel, ProductEntryViewModel, ProductListViewModel,
};

// --------------------------------------------------------
// Product List View
// --------------------------------------------------------

pub struct ProductListView<'a> {
    data: &'a ProductListViewModel,
    style: TextStyle,
}

impl<'a> ProductListView<'a> {
    pub fn new(data: &'a ProductListViewModel, style: TextStyle) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for ProductListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.products.is_empty() {
            return writeln!(f, "No products to show.");
        }

        writeln!(
            f,
            "{}",
            self.style
                .heading(&format!("{:<4} {:<32} {:<6} RATING", "ID", "NAME", "STARS"))
        )?;
        writeln!(f, "{}", "-".repeat(56))?;

        for product in &self.data.products {
            writeln!(
                f,
                "{:<4} {:<32} {} {}",
                product.id,
                truncate(&product.name, 32),
                self.style.accent(&stars(product.stars)),
                format_rating(product.rating)
            )?;
        }

        writeln!(f)?;
        write!(f, "{} product(s)", self.data.total_count)?;
        if let Some(rating) = self.data.rating_filter {
            write!(f, " rated {}", format_rating(rating))?;
        }
        if let Some(query) = &self.data.query {
            write!(f, " matching \"{}\"", query)?;
        }
        writeln!(f)
    }
}

// --------------------------------------------------------
// Product Detail View
// --------------------------------------------------------

pub struct ProductDetailView<'a> {
    data: &'a ProductDetailViewModel,
    style: TextStyle,
}

impl<'a> ProductDetailView<'a> {
    pub fn new(data: &'a ProductDetailViewModel, style: TextStyle) -> Self {
        Self { data, style }
    }

    fn product(&self) -> &ProductEntryViewModel {
        &self.data.product
    }
}

impl<'a> fmt::Display for ProductDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.product();
        writeln!(f, "{}", self.style.heading(&p.name))?;
        writeln!(
            f,
            "{} {}",
            self.style.accent(&stars(p.stars)),
            format_rating(p.rating)
        )?;

        if !p.benefits.is_empty() {
            writeln!(f)?;
            for benefit in &p.benefits {
                writeln!(f, "  ✓ {}", benefit)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Buy now: {}", p.affiliate_link)?;
        writeln!(f, "{}", self.style.dim(&format!("Image:   {}", p.image)))
    }
}
