//! Built-in sample data
//!
//! An excerpt of the Vega `cars` dataset, used by the CLI (`--builtin cars`)
//! and throughout the tests.

use crate::{DataFrame, Result};
use polars::prelude::*;

/// Names of the built-in datasets
pub const BUILTIN_DATASETS: &[&str] = &["cars"];

/// Load a built-in dataset by name
pub fn builtin(name: &str) -> Option<Result<DataFrame>> {
    match name {
        "cars" => Some(cars()),
        _ => None,
    }
}

/// 24 rows of the Vega `cars` dataset
///
/// `Miles_per_Gallon` and `Horsepower` contain missing values, as in the
/// full dataset.
pub fn cars() -> Result<DataFrame> {
    let df = df! {
        "Name" => &[
            "chevrolet chevelle malibu",
            "buick skylark 320",
            "plymouth satellite",
            "amc rebel sst",
            "ford torino",
            "ford galaxie 500",
            "chevrolet impala",
            "plymouth fury iii",
            "pontiac catalina",
            "amc ambassador dpl",
            "citroen ds-21 pallas",
            "toyota corona mark ii",
            "plymouth duster",
            "datsun pl510",
            "volkswagen 1131 deluxe sedan",
            "peugeot 504",
            "audi 100 ls",
            "saab 99e",
            "bmw 2002",
            "ford pinto",
            "chevrolet vega 2300",
            "toyota corona",
            "datsun 1200",
            "opel 1900",
        ],
        "Miles_per_Gallon" => &[
            Some(18.0), Some(15.0), Some(18.0), Some(16.0), Some(17.0), Some(15.0),
            Some(14.0), Some(14.0), Some(14.0), Some(15.0), None, Some(24.0),
            Some(22.0), Some(27.0), Some(26.0), Some(25.0), Some(24.0), Some(25.0),
            Some(26.0), Some(25.0), Some(28.0), Some(25.0), Some(35.0), Some(28.0),
        ],
        "Cylinders" => &[
            8i32, 8, 8, 8, 8, 8, 8, 8, 8, 8, 4, 4,
            6, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
        ],
        "Displacement" => &[
            307.0, 350.0, 318.0, 304.0, 302.0, 429.0, 454.0, 440.0, 455.0, 390.0, 133.0, 113.0,
            198.0, 97.0, 97.0, 110.0, 107.0, 104.0, 121.0, 98.0, 140.0, 113.0, 72.0, 116.0,
        ],
        "Horsepower" => &[
            Some(130.0), Some(165.0), Some(150.0), Some(150.0), Some(140.0), Some(198.0),
            Some(220.0), Some(215.0), Some(225.0), Some(190.0), Some(115.0), Some(95.0),
            Some(95.0), Some(88.0), Some(46.0), Some(87.0), Some(90.0), Some(95.0),
            Some(113.0), None, Some(90.0), Some(95.0), Some(69.0), Some(90.0),
        ],
        "Weight_in_lbs" => &[
            3504i32, 3693, 3436, 3433, 3449, 4341, 4354, 4312, 4425, 3850, 3090, 2372,
            2833, 2130, 1835, 2672, 2430, 2375, 2234, 2046, 2264, 2228, 1613, 2123,
        ],
        "Acceleration" => &[
            12.0, 11.5, 11.0, 12.0, 10.5, 10.0, 9.0, 8.5, 10.0, 8.5, 17.5, 15.0,
            15.5, 14.5, 20.5, 17.5, 14.5, 17.5, 12.5, 19.0, 15.5, 14.0, 18.0, 14.0,
        ],
        "Year" => &[
            1970i32, 1970, 1970, 1970, 1970, 1970, 1970, 1970, 1970, 1970, 1970, 1970,
            1970, 1970, 1970, 1970, 1970, 1970, 1970, 1971, 1971, 1971, 1971, 1971,
        ],
        "Origin" => &[
            "USA", "USA", "USA", "USA", "USA", "USA", "USA", "USA", "USA", "USA", "Europe", "Japan",
            "USA", "Japan", "Europe", "Europe", "Europe", "Europe", "Europe", "USA", "USA", "Japan",
            "Japan", "Europe",
        ],
    }?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cars_shape() {
        let df = cars().unwrap();
        assert_eq!(df.shape(), (24, 9));
        assert_eq!(df.column("Horsepower").unwrap().null_count(), 1);
        assert_eq!(df.column("Miles_per_Gallon").unwrap().null_count(), 1);
        assert_eq!(df.column("Origin").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_builtin_lookup() {
        assert!(builtin("cars").is_some());
        assert!(builtin("penguins").is_none());
        for name in BUILTIN_DATASETS {
            assert!(builtin(name).unwrap().is_ok());
        }
    }
}
