//! Output formatting module

use cabbook_app::session::SubmissionReceipt;
use cabbook_domain::{catalog, BookingRequest, SubmissionResult};
use cabbook_types::{OutputFormat, Result};
use serde::Serialize;

pub fn output_vehicles(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct VehicleRow<'a> {
            key: &'a str,
            #[serde(flatten)]
            entry: &'a cabbook_domain::VehicleCatalogEntry,
        }

        let rows: Vec<_> = catalog::entries()
            .map(|(vehicle, entry)| VehicleRow {
                key: vehicle.key(),
                entry,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("\nVehicle Types");
    println!("=============");
    println!(
        "{:<16} {:<16} {:<18} {:>10}  Examples",
        "Key", "Name", "Capacity", "From (₹)"
    );
    for (vehicle, entry) in catalog::entries() {
        println!(
            "{:<16} {:<16} {:<18} {:>10}  {}",
            vehicle.key(),
            entry.name,
            entry.capacity,
            entry.base_price,
            entry.examples
        );
        println!("{:<16} {}", "", entry.description);
    }

    Ok(())
}

pub fn output_preview(
    output_format: OutputFormat,
    request: &BookingRequest,
    result: &SubmissionResult,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "request": request,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_result(result);
    Ok(())
}

pub fn output_receipt(output_format: OutputFormat, receipt: &SubmissionReceipt) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(receipt)?);
        return Ok(());
    }

    print_result(&receipt.result);
    println!("\nReference:       {}", receipt.reference);
    println!("Submitted at:    {}", receipt.submitted_at.to_rfc3339());
    println!();
    for line in &receipt.acknowledgment {
        println!("{}", line);
    }

    Ok(())
}

fn print_result(result: &SubmissionResult) {
    println!("\nBooking Summary");
    println!("===============");
    println!("{}", result.summary);
    println!("\n--- Dispatch Links ---");
    println!("Messaging: {}", result.messaging_uri);
    println!("Mail:      {}", result.mailto_uri);
}
