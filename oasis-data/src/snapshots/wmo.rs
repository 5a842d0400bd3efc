//! WMO weather interpretation codes.
//!
//! See: <https://open-meteo.com/en/docs#weathervariables>

/// Status reported instead of the code label during a heatwave.
pub const HEATWAVE_LABEL: &str = "Canicule";
/// Temperature above which [`HEATWAVE_LABEL`] overrides the code label.
pub const HEATWAVE_THRESHOLD_C: f64 = 30.0;

/// French label for a WMO weather code.
///
/// Unknown codes map to `"Variable"`.
///
/// # Examples
/// ```
/// use oasis_data::weather_label;
///
/// assert_eq!(weather_label(0), "Ensoleillé");
/// assert_eq!(weather_label(63), "Pluie modérée");
/// assert_eq!(weather_label(80), "Variable");
/// ```
#[must_use]
pub const fn weather_label(code: u16) -> &'static str {
    match code {
        0 | 1 => "Ensoleillé",
        2 => "Partiellement nuageux",
        3 => "Nuageux",
        45 => "Brouillard",
        48 => "Brouillard givrant",
        51 => "Bruine légère",
        53 => "Bruine modérée",
        55 => "Bruine dense",
        61 => "Pluie faible",
        63 => "Pluie modérée",
        65 => "Pluie forte",
        71 => "Neige faible",
        73 => "Neige modérée",
        75 => "Neige forte",
        95 => "Orage",
        96 => "Orage avec grêle",
        99 => "Orage fort",
        _ => "Variable",
    }
}

/// Status shown for a reading: the code label, or [`HEATWAVE_LABEL`] above
/// [`HEATWAVE_THRESHOLD_C`].
#[must_use]
pub const fn weather_status(code: u16, temperature: f64) -> &'static str {
    if temperature > HEATWAVE_THRESHOLD_C {
        HEATWAVE_LABEL
    } else {
        weather_label(code)
    }
}
