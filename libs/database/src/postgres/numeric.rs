use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{ColIdx, DbErr, QueryResult, TryGetError, TryGetable};
use serde::{Deserialize, Serialize};

/// A `NUMERIC`/`DECIMAL` column decoded as a native float.
///
/// The driver hands `NUMERIC` back as an arbitrary-precision decimal. Row
/// structs that declare a `Numeric` field get an `f64` instead, and serialize
/// it as a plain JSON number.
///
/// ```ignore
/// #[derive(FromQueryResult)]
/// struct PriceRow {
///     price: Numeric,
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Numeric(pub f64);

impl Numeric {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Numeric> for f64 {
    fn from(value: Numeric) -> Self {
        value.0
    }
}

impl TryFrom<Decimal> for Numeric {
    type Error = DbErr;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        value
            .to_f64()
            .map(Numeric)
            .ok_or_else(|| DbErr::Type(format!("NUMERIC value {} does not fit in f64", value)))
    }
}

impl TryGetable for Numeric {
    fn try_get_by<I: ColIdx>(res: &QueryResult, index: I) -> Result<Self, TryGetError> {
        let decimal = Decimal::try_get_by(res, index)?;
        Numeric::try_from(decimal).map_err(TryGetError::DbErr)
    }
}
