//! # Quote
//!
//! Walks one booking through the controller against the seeded catalog and
//! prints the summary and payment receipt as JSON.
//!
//! ```text
//! quote [PRODUCT] [NIGHTS]
//!
//!   PRODUCT  product name (default "A-1 데크")
//!   NIGHTS   nights starting a week from today (default 3)
//! ```

use std::error::Error;
use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};
use pureun_booking::{
    init_tracing, ApproveAll, BookingConfig, BookingController, BookingError, ErrorResponse,
    InMemoryCatalog, PageStatus,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let product = args.next().unwrap_or_else(|| "A-1 데크".to_string());
    let nights: u64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 3,
    };

    let config = BookingConfig::from_env();
    info!(?config, "Configuration loaded");

    let mut controller = BookingController::new(
        Arc::new(InMemoryCatalog::seeded()),
        Arc::new(ApproveAll),
        config,
    );

    if controller.load(&product).await != PageStatus::Ready {
        return Err(format!("데이터를 가져오는 데 실패했습니다: {product}").into());
    }

    let (check_in, check_out) = stay_dates(Local::now().date_naive(), nights)
        .ok_or_else(|| format!("{nights} nights is outside the calendar"))?;

    if let Err(err) = book(&mut controller, check_in, check_out).await {
        eprintln!("{}", serde_json::to_string_pretty(&ErrorResponse::from(&err))?);
        return Err(err.into());
    }

    Ok(())
}

/// Check-in a week after `today`, check-out `nights` later.
fn stay_dates(today: NaiveDate, nights: u64) -> Option<(NaiveDate, NaiveDate)> {
    let check_in = today.checked_add_days(Days::new(7))?;
    let check_out = check_in.checked_add_days(Days::new(nights))?;
    Some((check_in, check_out))
}

/// Two fire sets and one extra guest, then payment.
async fn book(
    controller: &mut BookingController,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<(), BookingError> {
    controller.set_date_range(Some(check_in), Some(check_out))?;
    controller.select_option("불멍 세트")?;
    controller.increase("불멍 세트")?;
    let summary = controller.change_guest_count(1)?;
    print_json(&summary);

    let receipt = controller.reserve().await?;
    print_json(&receipt);
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!(error = %err, "Could not render output"),
    }
}
