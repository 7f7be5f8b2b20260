//! Canonical schema: vendor field codes, display column names, sentinels.

/// Canonical column names, as shown to the presentation sink.
pub const SPECIES_NAME: &str = "Nombre de la Especie";
pub const TICKER: &str = "Ticker";
pub const QUANTITY: &str = "Cantidad";
pub const HOUR: &str = "Hora";
pub const LAST_PRICE: &str = "Ultimo Precio";
pub const RESULT: &str = "Resultado";
pub const AVG_COST: &str = "Costo Promedio";
pub const SABE_DIOS: &str = "Sabe Dios";
pub const TOTAL_VAR_PCT: &str = "% Var Total";
pub const CURRENT_VALUE: &str = "Importe Actual";
pub const USD_VALUE: &str = "Actual en U$S";
pub const DAILY_PCT: &str = "% Diario";
pub const DAILY_RESULT: &str = "Resultado del dia";
pub const DETAIL: &str = "Detalle de operaciones diarias";

/// Vendor fields carried through under their own names.
pub const ASSET_TYPE: &str = "TIPO";
pub const SPECIES_CODE: &str = "ESPE";

/// Species name of the synthetic aggregate row.
pub const TOTALS_LABEL: &str = "TOTALES";
/// Ticker of the reference instrument whose price is the FX rate.
pub const FX_TICKER: &str = "DOLARUSA";
/// "Hora" value marking the end-of-day record, compared case-insensitively.
pub const CLOSE_MARKER: &str = "CIERRE";

pub const CASH_SPECIES: &str = "Cash";
pub const CASH_CATEGORY: &str = "Efectivo";

/// Vendor field code → canonical column name. Codes absent from a record are
/// skipped; fields without an entry keep their vendor name.
pub const RENAME_TABLE: &[(&str, &str)] = &[
    ("AMPL", SPECIES_NAME),
    ("TICK", TICKER),
    ("CANT", QUANTITY),
    ("Hora", HOUR),
    ("PCIO", LAST_PRICE),
    ("GTOS", RESULT),
    ("CAN0", AVG_COST),
    ("CAN2", SABE_DIOS),
    ("CAN3", TOTAL_VAR_PCT),
    ("IMPO", CURRENT_VALUE),
    ("Detalle", DETAIL),
];

/// Columns the metric deriver coerces to numbers.
pub const NUMERIC_COLUMNS: &[&str] =
    &[LAST_PRICE, RESULT, AVG_COST, TOTAL_VAR_PCT, CURRENT_VALUE];

/// Columns summed into the totals row. Percentage columns are excluded: a
/// summed percentage would imply a meaningless aggregate.
pub const SUMMED_COLUMNS: &[&str] = &[RESULT, CURRENT_VALUE, USD_VALUE, DAILY_RESULT];

/// Final display columns in fixed order. The projector keeps the subset that
/// is present, so column order is stable across cycles.
pub const CANDIDATE_COLUMNS: &[&str] = &[
    ASSET_TYPE,
    SPECIES_NAME,
    TICKER,
    QUANTITY,
    HOUR,
    LAST_PRICE,
    RESULT,
    AVG_COST,
    SABE_DIOS,
    TOTAL_VAR_PCT,
    CURRENT_VALUE,
    USD_VALUE,
    DAILY_PCT,
    DAILY_RESULT,
    DETAIL,
];

/// Coded TIPO value → human asset category.
pub fn asset_category(code: &str) -> Option<&'static str> {
    match code {
        "0" => Some("Acciones"),
        "1" => Some("Bonos"),
        "2" => Some("Panel General"),
        "3" => Some("ON"),
        "4" => Some("Dolar USA"),
        "5" => Some("Opciones"),
        "6" => Some("Letras"),
        "7" => Some("Cedear"),
        _ => None,
    }
}

/// Round to two decimals, the table's display precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
