mod country;
mod exchange_rate;
mod price_index;
mod product;

pub use country::{
    CountryEntry, CountryMeta, CountryProductInfo, CurrencyMeta, ResolvedPriceInfo, SeriesPoint,
};
pub use exchange_rate::{is_known_month, ExchangeRateResponse, MonthRates, RateTable, MONTH_NAMES};
pub use price_index::{IndexItem, PriceIndex, RatesUsed, SortOrder};
pub use product::{ProductEntry, ProductList, ProductWithId};
