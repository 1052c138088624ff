//! Rate quote example for the Canada Post library.
//!
//! This example demonstrates how to:
//! - Create a Canada Post client against the sandbox gateway
//! - Describe a mailing scenario
//! - Request rate quotes and print the price breakdown
//!
//! Usage:
//! ```
//! CPC_API_KEY=your_api_key cargo run --example rate_quote -- K2B8J6 J0E1X0 1.5
//! ```

use canadapost_xml::types::{Destination, MailingScenario, ParcelCharacteristics};
use canadapost_xml::{CanadaPostClient, CanadaPostError, Environment};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let api_key = env::var("CPC_API_KEY").expect("CPC_API_KEY environment variable must be set");

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <origin-postal-code> <destination-postal-code> <weight-kg>", args[0]);
        eprintln!("Example: {} K2B8J6 J0E1X0 1.5", args[0]);
        std::process::exit(1);
    }
    let origin = args[1].to_uppercase();
    let destination = args[2].to_uppercase();
    let weight: f64 = args[3].parse()?;

    println!("Creating Canada Post client (sandbox)...");
    let client = CanadaPostClient::new(&api_key, Environment::Sandbox)?;

    let scenario = MailingScenario {
        parcel_characteristics: ParcelCharacteristics::with_weight(weight),
        origin_postal_code: Some(origin),
        destination: Some(Destination::domestic(destination)),
        ..Default::default()
    };

    println!("Requesting rate quotes...");
    match client.get_shipping_rates(&scenario).await {
        Ok(quotes) => {
            println!("\n=== Rate Quotes ===");
            for quote in &quotes.price_quote {
                println!("{} ({})", quote.service_name, quote.service_code);
                println!("  Base:  ${:.2}", quote.price_details.base);
                if let Some(taxes) = &quote.price_details.taxes {
                    println!("  Taxes: ${:.2}", taxes.total());
                }
                println!("  Due:   ${:.2}", quote.price_details.due);

                if let Some(standard) = &quote.service_standard {
                    if let Some(date) = &standard.expected_delivery_date {
                        let guaranteed = standard.guaranteed_delivery == Some(true);
                        println!(
                            "  Delivery: {}{}",
                            date,
                            if guaranteed { " (guaranteed)" } else { "" }
                        );
                    }
                }
            }

            if let Some(cheapest) = quotes.cheapest() {
                println!(
                    "\nCheapest: {} at ${:.2}",
                    cheapest.service_name, cheapest.price_details.due
                );
            }
        }
        Err(CanadaPostError::Carrier { messages }) => {
            eprintln!("Canada Post rejected the scenario:");
            for message in messages {
                eprintln!("  [{}] {}", message.code, message.description);
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Rate quote error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
