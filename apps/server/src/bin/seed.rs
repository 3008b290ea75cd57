//! Loads a fixed catalogue of sample assets into a running registry.
//!
//! Base URL comes from `AR_SEED_URL` (default `http://localhost:8000`).

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Context;
use asset_registry_server::models::{Asset, AssetInput};

const DEFAULT_SEED_URL: &str = "http://localhost:8000";
const REQUEST_TIMEOUT_SECS: u64 = 10;

fn sample(
    name: &str,
    category: &str,
    value: f64,
    purchase_date: &str,
    description: &str,
) -> AssetInput {
    AssetInput {
        name: name.to_string(),
        category: category.to_string(),
        value,
        purchase_date: purchase_date.to_string(),
        description: Some(description.to_string()),
    }
}

fn catalogue() -> Vec<AssetInput> {
    vec![
        // Electronics
        sample(
            "MacBook Pro 16-inch",
            "Electronics",
            18999.0,
            "2023-03-15",
            "Main development laptop, M2 Pro, 32GB RAM, 1TB storage",
        ),
        sample(
            "iPhone 15 Pro",
            "Electronics",
            8999.0,
            "2024-09-20",
            "Company-issued phone, titanium, 256GB",
        ),
        sample(
            "Dell 32-inch 4K Monitor",
            "Electronics",
            3299.0,
            "2023-08-10",
            "Professional 4K display with single-cable USB-C, 99% sRGB",
        ),
        sample(
            "Sony WH-1000XM5 Headphones",
            "Electronics",
            2399.0,
            "2024-01-20",
            "Noise-cancelling, 30h battery, multipoint",
        ),
        sample(
            "iPad Pro 12.9-inch",
            "Electronics",
            8799.0,
            "2024-05-15",
            "M2, 512GB, with Apple Pencil and Magic Keyboard",
        ),
        // Office supplies
        sample(
            "Herman Miller Ergonomic Chair",
            "Office Supplies",
            8500.0,
            "2023-02-28",
            "Aeron classic, fully adjustable, 12-year warranty",
        ),
        sample(
            "Standing Desk",
            "Office Supplies",
            2800.0,
            "2023-03-05",
            "Electric lift with height memory, 150cm x 80cm",
        ),
        sample(
            "Laser Printer",
            "Office Supplies",
            1299.0,
            "2024-02-10",
            "HP LaserJet Pro, duplex, wireless, 3000 pages/month",
        ),
        sample(
            "Document Shredder",
            "Office Supplies",
            899.0,
            "2024-06-01",
            "Security level 4, shreds cards and discs, 22L bin",
        ),
        sample(
            "Meeting Whiteboard",
            "Office Supplies",
            450.0,
            "2023-11-15",
            "Magnetic, 120cm x 90cm, with markers and eraser",
        ),
        // Vehicles
        sample(
            "Tesla Model Y",
            "Vehicles",
            263900.0,
            "2024-01-08",
            "Long range, dual motor AWD, company business car",
        ),
        sample("Toyota Camry", "Vehicles", 189800.0, "2022-09-12", "2.5L hybrid, daily commuting"),
        sample(
            "BMW X3",
            "Vehicles",
            389900.0,
            "2023-06-20",
            "xDrive25i luxury package, panoramic roof, adaptive cruise",
        ),
        // Property
        sample(
            "Office Tower A, Floor 10",
            "Property",
            12800000.0,
            "2021-03-01",
            "Headquarters, 1200 square metres of usable space",
        ),
        sample(
            "Warehouse Center",
            "Property",
            3600000.0,
            "2022-11-30",
            "Logistics base, 5000 square metres, modern racking",
        ),
        // Furniture
        sample(
            "Solid Wood Conference Table",
            "Furniture",
            15800.0,
            "2023-01-18",
            "Walnut, seats 12, with leather chairs",
        ),
        sample(
            "Reception Sofa Set",
            "Furniture",
            8900.0,
            "2023-04-22",
            "Italian leather, 1+2+3 arrangement, black",
        ),
        sample(
            "Filing Cabinet",
            "Furniture",
            1200.0,
            "2024-03-10",
            "Steel, four doors, fire and damp resistant, locking",
        ),
        sample(
            "Front Desk",
            "Furniture",
            4500.0,
            "2023-02-15",
            "Tempered glass top with LED strip",
        ),
        // Other
        sample(
            "Air Purifier",
            "Other",
            2899.0,
            "2024-04-18",
            "HEPA filter, covers 60 square metres, quiet mode",
        ),
        sample(
            "Coffee Machine",
            "Other",
            4200.0,
            "2023-12-08",
            "Fully automatic espresso with built-in grinder",
        ),
        sample(
            "Security Camera System",
            "Other",
            8600.0,
            "2023-05-30",
            "16 channels, 4K, night vision, remote viewing",
        ),
        sample(
            "UPS Power Supply",
            "Other",
            3500.0,
            "2024-07-12",
            "3000VA online UPS protecting the server room",
        ),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let base_url = std::env::var("AR_SEED_URL").unwrap_or_else(|_| DEFAULT_SEED_URL.to_string());
    let assets_url = format!("{}/api/assets", base_url.trim_end_matches('/'));

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .context("Failed to initialize HTTP client")?;

    client
        .get(&assets_url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("Cannot reach the asset registry at {}", base_url))?;

    let samples = catalogue();
    let mut created = 0usize;
    let mut failed = 0usize;

    for (i, input) in samples.iter().enumerate() {
        let response = client
            .post(&assets_url)
            .json(input)
            .send()
            .await
            .with_context(|| format!("Connection to {} lost", base_url))?;

        let status = response.status();
        if status.is_success() {
            let asset: Asset = response.json().await?;
            created += 1;
            println!(
                "[{:2}] created #{} {} - {} - {:.2}",
                i + 1,
                asset.id,
                asset.name,
                asset.category,
                asset.value
            );
        } else {
            failed += 1;
            println!("[{:2}] failed {} - HTTP {}", i + 1, input.name, status);
        }
    }

    let mut by_category: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for input in &samples {
        let entry = by_category.entry(input.category.as_str()).or_default();
        entry.0 += 1;
        entry.1 += input.value;
    }
    let total_value: f64 = samples.iter().map(|a| a.value).sum();

    println!("Created: {}", created);
    println!("Failed: {}", failed);
    for (category, (count, value)) in &by_category {
        println!("  {}: {} assets, {:.2}", category, count, value);
    }
    println!("Catalogue value: {:.2}", total_value);

    let stored: Vec<Asset> = client
        .get(&assets_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    println!("Assets now in registry: {}", stored.len());

    if failed > 0 {
        anyhow::bail!("{} of {} sample assets failed to load", failed, samples.len());
    }
    Ok(())
}
