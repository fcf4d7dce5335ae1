//! Property ledger and theme listings.

use log::info;
use pmd_dashboard::format::format_pln;
use pmd_dashboard::{PropertiesPage, Theme};
use pmd_properties::PropertyBook;

/// Print the sample ledger with portfolio totals.
pub fn run_properties(json: bool) -> anyhow::Result<()> {
    let page = PropertiesPage::sample()?;
    info!("Listing {} properties", page.book().len());
    if json {
        let payload = serde_json::json!({
            "properties": page.book(),
            "stats": page.stats(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", render_properties(page.book()));
    }
    Ok(())
}

pub fn render_properties(book: &PropertyBook) -> String {
    if book.is_empty() {
        return "No properties yet\n".to_string();
    }
    let mut out = String::new();
    for property in book {
        out.push_str(&format!("[{}] {}\n", property.id, property.name));
        out.push_str(&format!("    {}\n", property.location()));
        out.push_str(&format!(
            "    {}/month | {} m² | {} bd | {} ba\n",
            format_pln(property.rent_price),
            property.size,
            property.bedrooms,
            property.bathrooms
        ));
        if let Some(description) = &property.description {
            out.push_str(&format!("    {description}\n"));
        }
    }
    let stats = book.stats();
    out.push_str(&format!(
        "\nTotal properties: {} | Monthly rent: {} | Average rent: {}\n",
        stats.total_properties,
        format_pln(stats.total_monthly_rent),
        format_pln(stats.average_rent)
    ));
    out
}

/// Print the theme catalogue grouped as in the selector.
pub fn run_themes() -> anyhow::Result<()> {
    print!("{}", render_themes());
    Ok(())
}

pub fn render_themes() -> String {
    let mut out = String::from("Default\n");
    for theme in Theme::STANDARD {
        out.push_str(&format!("  {:<16} {}\n", theme.value(), theme.name()));
    }
    out.push_str("Scaled\n");
    for theme in Theme::SCALED {
        out.push_str(&format!("  {:<16} {}\n", theme.value(), theme.name()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sample_properties() {
        let book = PropertyBook::sample().unwrap();
        let text = render_properties(&book);
        assert!(text.starts_with("[1] Sunny Apartment\n"));
        assert!(text.contains("    ul. Floriańska 45, Kraków\n"));
        assert!(text.contains("    3500 zł/month | 65 m² | 2 bd | 1 ba\n"));
        assert!(text.ends_with(
            "Total properties: 2 | Monthly rent: 5700 zł | Average rent: 2850 zł\n"
        ));
    }

    #[test]
    fn test_render_empty_ledger() {
        assert_eq!(render_properties(&PropertyBook::new()), "No properties yet\n");
    }

    #[test]
    fn test_render_themes() {
        let text = render_themes();
        assert_eq!(text.lines().count(), 10);
        assert!(text.contains("  mono-scaled      Mono\n"));
    }
}
