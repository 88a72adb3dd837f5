use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::market_data_model::Quote;

/// Prices never drop below this after a tick.
pub const PRICE_FLOOR: Decimal = dec!(0.01);

/// Bound for the per-tick random price delta (symmetric around zero).
pub const MAX_TICK_DELTA: f64 = 1.0;

/// The fixed quote list the simulation starts from.
pub fn seed_quotes() -> Vec<Quote> {
    let seed = [
        ("PETR4", "Petrobras PN", dec!(32.45), dec!(1.23), dec!(3.95)),
        ("VALE3", "Vale ON", dec!(68.90), dec!(-2.10), dec!(-2.96)),
        ("ITUB4", "Itaú PN", dec!(28.75), dec!(0.45), dec!(1.59)),
        ("BBDC4", "Bradesco PN", dec!(14.20), dec!(-0.30), dec!(-2.07)),
        ("ABEV3", "Ambev ON", dec!(12.85), dec!(0.15), dec!(1.18)),
        ("WEGE3", "WEG ON", dec!(36.80), dec!(0.80), dec!(2.22)),
        ("RENT3", "Localiza ON", dec!(45.60), dec!(-1.20), dec!(-2.56)),
        ("LREN3", "Lojas Renner ON", dec!(18.90), dec!(0.40), dec!(2.16)),
        ("MGLU3", "Magazine Luiza ON", dec!(2.15), dec!(0.05), dec!(2.38)),
        ("CVCB3", "CVC ON", dec!(6.80), dec!(-0.20), dec!(-2.86)),
    ];

    seed.into_iter()
        .map(|(symbol, name, price, change, change_percent)| Quote {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            change_percent,
        })
        .collect()
}
