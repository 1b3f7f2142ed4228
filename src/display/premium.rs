//! Premium plan offer
//!
//! Static promotional text. None of the advertised features exist; there is
//! no subscription or payment behind it.

use crate::models::Money;

/// Features listed on the offer
pub const PREMIUM_FEATURES: &[&str] = &[
    "Detailed reports and insights",
    "Bank synchronization",
    "No ads",
    "Unlimited custom goals",
];

/// Monthly price shown on the offer
pub const PREMIUM_MONTHLY_PRICE: Money = Money::from_cents(1990);

/// Render the offer for the terminal
pub fn format_premium_offer(currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Unlock Premium\n");
    output.push_str("Advanced statistics and exclusive features\n\n");

    for feature in PREMIUM_FEATURES {
        output.push_str(&format!("  * {}\n", feature));
    }

    output.push_str(&format!(
        "\nOnly {} per month\n",
        PREMIUM_MONTHLY_PRICE.format_with_symbol(currency_symbol)
    ));
    output.push_str("Cancel anytime. No commitment.\n");

    output
}
