quantity!(WattHours, f64, "Wh");
quantity!(KilowattHours, f64, "kWh");

impl From<WattHours> for KilowattHours {
    fn from(watt_hours: WattHours) -> Self {
        Self(watt_hours.0 / 1000.0)
    }
}

impl KilowattHours {
    /// Round to a single decimal.
    ///
    /// Rounds the exact decimal value of the float, ties go to the even digit.
    /// Scaling by ten first would round the already inexact product instead.
    #[must_use]
    pub fn round_to_tenths(self) -> Self {
        format!("{:.1}", self.0).parse().map_or(self, Self)
    }
}
