use crate::model::Product;

/// Markdown listing used by the `list` and `search` commands.
pub fn format_product_list(heading: &str, products: &[Product], empty_message: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("## {} ({} products)\n\n", heading, products.len()));

    if products.is_empty() {
        out.push_str(empty_message);
        out.push('\n');
        return out;
    }

    for (i, product) in products.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n", i + 1, product.title));
        if !product.brand.is_empty() {
            out.push_str(&format!("- **Brand:** {}\n", product.brand));
        }
        out.push_str(&format!(
            "- **Price:** {}\n",
            format_price_with_discount(product)
        ));
        out.push_str(&format!("- **Rating:** {:.1}/5\n", product.rating));
        out.push_str(&format!("- **ID:** {}\n", product.id));

        if i < products.len() - 1 {
            out.push_str("\n---\n\n");
        }
    }

    out
}

pub fn format_product_detail(product: &Product) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", product.title));

    out.push_str("## Overview\n");
    out.push_str(&format!(
        "- **Price:** {}\n",
        format_price_with_discount(product)
    ));
    out.push_str(&format!("- **Rating:** ★ {:.1}\n", product.rating));
    out.push_str(&format!(
        "- **Category:** {}\n",
        capitalize_words(&product.category)
    ));
    out.push('\n');

    if !product.description.is_empty() {
        out.push_str("## Description\n");
        out.push_str(&product.description);
        out.push_str("\n\n");
    }

    out.push_str("## Details\n");
    if !product.brand.is_empty() {
        out.push_str(&format!("- **Brand:** {}\n", product.brand));
    }
    out.push_str(&format!(
        "- **Stock:** {} units\n",
        format_number(product.stock)
    ));
    out.push_str(&format!(
        "- **Discount:** {}%\n",
        product.discount_percentage
    ));
    out.push('\n');

    if !product.images.is_empty() {
        out.push_str("## Images\n");
        for url in &product.images {
            out.push_str(&format!("- {}\n", url));
        }
        out.push('\n');
    }

    out
}

/// `$` followed by the shortest decimal form, e.g. `$549` or `$9.99`.
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

pub fn discount_badge(discount_percentage: f64) -> String {
    format!("{}% OFF", discount_percentage.round() as u32)
}

fn format_price_with_discount(product: &Product) -> String {
    if product.has_discount() {
        format!(
            "{} ({})",
            format_price(product.price),
            discount_badge(product.discount_percentage)
        )
    } else {
        format_price(product.price)
    }
}

pub fn capitalize_words(text: &str) -> String {
    text.split(&['-', ' '][..])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
