//! Public holidays of Hong Kong.

use time::macros::date;

use crate::domain::PublicHoliday;

/// Version of the [`HOLIDAYS`] table.
pub(super) const VERSION: &str = "2026-2027";

/// Public holidays of Hong Kong for 2026 and 2027.
pub(super) const HOLIDAYS: &[PublicHoliday] = &[
    // 2026
    PublicHoliday::new(date!(2026 - 01 - 01), "New Year's Day"),
    PublicHoliday::new(date!(2026 - 02 - 06), "Lunar New Year's Day"),
    PublicHoliday::new(date!(2026 - 02 - 07), "Second Day of Lunar New Year"),
    PublicHoliday::new(date!(2026 - 02 - 08), "Third Day of Lunar New Year"),
    PublicHoliday::new(date!(2026 - 04 - 04), "Ching Ming Festival"),
    PublicHoliday::new(date!(2026 - 04 - 05), "Good Friday"),
    PublicHoliday::new(date!(2026 - 04 - 06), "Day Following Good Friday"),
    PublicHoliday::new(date!(2026 - 04 - 07), "Easter Monday"),
    PublicHoliday::new(date!(2026 - 05 - 01), "Labour Day"),
    PublicHoliday::new(date!(2026 - 05 - 05), "Buddha's Birthday"),
    PublicHoliday::new(date!(2026 - 06 - 09), "Tuen Ng Festival"),
    PublicHoliday::new(
        date!(2026 - 07 - 01),
        "Hong Kong Special Administrative Region Establishment Day",
    ),
    PublicHoliday::new(date!(2026 - 10 - 06), "Day Following National Day"),
    PublicHoliday::new(date!(2026 - 10 - 07), "Chung Yeung Festival"),
    PublicHoliday::new(date!(2026 - 12 - 25), "Christmas Day"),
    PublicHoliday::new(date!(2026 - 12 - 26), "Boxing Day"),

    // 2027
    PublicHoliday::new(date!(2027 - 01 - 01), "New Year's Day"),
    PublicHoliday::new(date!(2027 - 02 - 25), "Lunar New Year's Day"),
    PublicHoliday::new(date!(2027 - 02 - 26), "Second Day of Lunar New Year"),
    PublicHoliday::new(date!(2027 - 02 - 27), "Third Day of Lunar New Year"),
    PublicHoliday::new(date!(2027 - 04 - 04), "Ching Ming Festival"),
    PublicHoliday::new(date!(2027 - 04 - 16), "Good Friday"),
    PublicHoliday::new(date!(2027 - 04 - 17), "Day Following Good Friday"),
    PublicHoliday::new(date!(2027 - 04 - 19), "Easter Monday"),
    PublicHoliday::new(date!(2027 - 05 - 01), "Labour Day"),
    PublicHoliday::new(date!(2027 - 05 - 24), "Buddha's Birthday"),
    PublicHoliday::new(date!(2027 - 06 - 29), "Tuen Ng Festival"),
    PublicHoliday::new(
        date!(2027 - 07 - 01),
        "Hong Kong Special Administrative Region Establishment Day",
    ),
    PublicHoliday::new(date!(2027 - 10 - 01), "National Day"),
    PublicHoliday::new(date!(2027 - 10 - 06), "Day Following National Day"),
    PublicHoliday::new(date!(2027 - 10 - 26), "Chung Yeung Festival"),
    PublicHoliday::new(date!(2027 - 12 - 25), "Christmas Day"),
    PublicHoliday::new(date!(2027 - 12 - 27), "Boxing Day"),
];
