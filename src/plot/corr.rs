//! Correlation heatmap

use super::palettes::check_scheme;
use super::{has_column, is_numeric_column};
use crate::chart::{ChartBuilder, FieldDef, FieldType, LegendConfig, Mark, MarkType, Scale};
use crate::stat::{correlation, numeric_values, CorrMethod};
use crate::{Chart, DataFrame, EdaError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Options for [`corr_map`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrMapOptions {
    /// Numeric columns to correlate, in display order
    pub features: Vec<String>,
    pub corr_method: CorrMethod,
    /// Diverging scheme for the coefficient color scale
    pub color_scheme: String,
    pub plot_width: u32,
    pub plot_height: u32,
    pub title: String,
}

impl Default for CorrMapOptions {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            corr_method: CorrMethod::Pearson,
            color_scheme: "blueorange".to_string(),
            plot_width: 450,
            plot_height: 450,
            title: "Correlation Map".to_string(),
        }
    }
}

impl CorrMapOptions {
    pub fn new<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            features: features.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

fn validate_features(data: &DataFrame, features: &[String]) -> Result<()> {
    if features.len() < 2 {
        return Err(EdaError::ValueError(
            "There should be at least 2 features in the list".to_string(),
        ));
    }
    if let Some(missing) = features.iter().find(|f| !has_column(data, f)) {
        return Err(EdaError::ValueError(format!(
            "Feature '{}' is not a column of the input dataframe",
            missing
        )));
    }
    if !features.iter().all(|f| is_numeric_column(data, f)) {
        return Err(EdaError::ValueError(
            "All features in the list should be numeric".to_string(),
        ));
    }
    Ok(())
}

fn validate(data: &DataFrame, options: &CorrMapOptions) -> Result<()> {
    validate_features(data, &options.features)?;

    if options.color_scheme.is_empty() {
        return Err(EdaError::TypeError(
            "The color scheme should be given as a non-empty string".to_string(),
        ));
    }
    if options.title.is_empty() {
        return Err(EdaError::TypeError(
            "The title should be given as a non-empty string".to_string(),
        ));
    }
    if options.plot_width == 0 {
        return Err(EdaError::TypeError(
            "The plot_width should be given as a positive integer".to_string(),
        ));
    }
    if options.plot_height == 0 {
        return Err(EdaError::TypeError(
            "The plot_height should be given as a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// Pairwise correlations of `features` in long form
///
/// The result has columns `level_0`, `level_1` and `corr`, one row per ordered
/// pair of features (row-major over `features`), so `features.len()²` rows.
/// Self pairs are exactly 1.0 unless the feature has no variance, in which case
/// every pair involving it is NaN.
pub fn corr_matrix(data: &DataFrame, features: &[String], method: CorrMethod) -> Result<DataFrame> {
    validate_features(data, features)?;

    let columns = features
        .iter()
        .map(|f| numeric_values(data, f))
        .collect::<Result<Vec<_>>>()?;

    let n = features.len();
    let mut level_0 = Vec::with_capacity(n * n);
    let mut level_1 = Vec::with_capacity(n * n);
    let mut coefficients = vec![f64::NAN; n * n];
    for i in 0..n {
        for j in i..n {
            let r = correlation(&columns[i], &columns[j], method);
            let r = if i == j && !r.is_nan() { 1.0 } else { r };
            coefficients[i * n + j] = r;
            coefficients[j * n + i] = r;
        }
    }
    for a in features {
        for b in features {
            level_0.push(a.as_str());
            level_1.push(b.as_str());
        }
    }

    let df = df! {
        "level_0" => level_0,
        "level_1" => level_1,
        "corr" => coefficients,
    }?;
    Ok(df)
}

/// Heatmap of the pairwise correlations between numeric features
///
/// Each ordered pair of features is one rectangle; both its size and its color
/// encode the coefficient, on a reversed diverging scale fixed to `[-1, 1]`.
/// Pan and zoom are bound to the axes.
pub fn corr_map(data: &DataFrame, options: &CorrMapOptions) -> Result<Chart> {
    validate(data, options)?;

    let corr_df = corr_matrix(data, &options.features, options.corr_method)?;

    let chart = ChartBuilder::new(corr_df, Mark::new(MarkType::Rect).with_opacity(0.45))
        .x(FieldDef::new("level_0", FieldType::Nominal).with_title(""))
        .y(FieldDef::new("level_1", FieldType::Nominal).with_title(""))
        .size(FieldDef::new("corr", FieldType::Quantitative).with_title("Correlation"))
        .color(
            FieldDef::new("corr", FieldType::Quantitative)
                .with_title("Correlation")
                .with_scale(
                    Scale::scheme(&options.color_scheme)
                        .with_domain(-1.0, 1.0)
                        .reversed(),
                ),
        )
        .tooltip(vec![
            FieldDef::new("level_0", FieldType::Nominal),
            FieldDef::new("level_1", FieldType::Nominal),
        ])
        .title(&options.title)
        .properties(options.plot_width, options.plot_height)
        .configure_axis(15, None)
        .configure_title(20)
        .configure_legend(LegendConfig {
            title_font_size: 14,
            title_align: "center".to_string(),
            label_font_size: 13,
        })
        .interactive()
        .warnings(check_scheme(&options.color_scheme))
        .build();

    tracing::debug!(
        features = options.features.len(),
        method = %options.corr_method,
        "Built correlation map"
    );
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Channel;
    use crate::reader::data::cars;

    fn features() -> Vec<String> {
        ["Horsepower", "Displacement", "Cylinders", "Acceleration"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn error_message(data: &DataFrame, options: &CorrMapOptions) -> String {
        corr_map(data, options).unwrap_err().to_string()
    }

    #[test]
    fn test_corr_map_pearson() {
        let data = cars().unwrap();
        let chart = corr_map(&data, &CorrMapOptions::new(features())).unwrap();

        assert_eq!(chart.mark().mark_type, MarkType::Rect);
        assert_eq!(chart.mark().opacity, Some(0.45));
        let color = chart.field(Channel::Color).unwrap();
        let scale = color.scale.as_ref().unwrap();
        assert_eq!(scale.domain, Some((-1.0, 1.0)));
        assert!(scale.reverse);
        assert_eq!(scale.scheme.as_deref(), Some("blueorange"));
        assert_eq!(color.title.as_deref(), Some("Correlation"));
        assert_eq!(
            chart.field(Channel::X).unwrap().title.as_deref(),
            Some("")
        );
        assert!(chart.is_interactive());
        assert_eq!(chart.title(), Some("Correlation Map"));
        assert_eq!(chart.width(), Some(450));
        assert_eq!(chart.data().height(), 16);
        assert!(chart.warnings().is_empty());
    }

    #[test]
    fn test_corr_map_config() {
        let data = cars().unwrap();
        let chart = corr_map(&data, &CorrMapOptions::new(features())).unwrap();
        let config = chart.config();
        assert_eq!(config.axis_label_font_size, Some(15));
        assert_eq!(config.axis_title_font_size, None);
        assert_eq!(config.title_font_size, Some(20));
        let legend = config.legend.as_ref().unwrap();
        assert_eq!(legend.title_font_size, 14);
        assert_eq!(legend.title_align, "center");
        assert_eq!(legend.label_font_size, 13);
    }

    #[test]
    fn test_corr_matrix_long_form() {
        let data = cars().unwrap();
        for method in [CorrMethod::Pearson, CorrMethod::Spearman, CorrMethod::Kendall] {
            let df = corr_matrix(&data, &features(), method).unwrap();
            assert_eq!(df.height(), 16);

            let level_0 = df.column("level_0").unwrap().str().unwrap();
            let level_1 = df.column("level_1").unwrap().str().unwrap();
            let corr = df.column("corr").unwrap().f64().unwrap();

            for i in 0..16 {
                let a = level_0.get(i).unwrap();
                let b = level_1.get(i).unwrap();
                let r = corr.get(i).unwrap();
                assert!((-1.0..=1.0).contains(&r), "{} {} {}", a, b, r);
                if a == b {
                    assert_eq!(r, 1.0);
                }
                // symmetric partner
                let j = (i % 4) * 4 + i / 4;
                assert_eq!(corr.get(j), Some(r));
            }
        }
    }

    #[test]
    fn test_corr_matrix_row_order() {
        let data = df! {
            "a" => &[1.0, 2.0, 3.0],
            "b" => &[3.0, 2.0, 1.0],
        }
        .unwrap();
        let df = corr_matrix(&data, &["a".to_string(), "b".to_string()], CorrMethod::Pearson)
            .unwrap();

        let level_0: Vec<_> = df.column("level_0").unwrap().str().unwrap().into_iter().flatten().collect();
        let level_1: Vec<_> = df.column("level_1").unwrap().str().unwrap().into_iter().flatten().collect();
        let corr: Vec<_> = df.column("corr").unwrap().f64().unwrap().into_iter().flatten().collect();
        assert_eq!(level_0, vec!["a", "a", "b", "b"]);
        assert_eq!(level_1, vec!["a", "b", "a", "b"]);
        assert_eq!(corr, vec![1.0, -1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_constant_feature_is_nan() {
        let data = df! {
            "a" => &[1.0, 2.0, 3.0],
            "c" => &[5.0, 5.0, 5.0],
        }
        .unwrap();
        let df = corr_matrix(&data, &["a".to_string(), "c".to_string()], CorrMethod::Pearson)
            .unwrap();
        let corr = df.column("corr").unwrap().f64().unwrap();
        assert_eq!(corr.get(0), Some(1.0));
        assert!(corr.get(1).unwrap().is_nan());
        assert!(corr.get(3).unwrap().is_nan());
    }

    #[test]
    fn test_vegalite_output() {
        let data = cars().unwrap();
        let json = corr_map(&data, &CorrMapOptions::new(features()))
            .unwrap()
            .to_vegalite()
            .unwrap();
        let spec: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(spec["mark"]["type"], "rect");
        assert_eq!(spec["encoding"]["color"]["scale"]["domain"], serde_json::json!([-1.0, 1.0]));
        assert_eq!(spec["encoding"]["color"]["scale"]["reverse"], true);
        assert_eq!(spec["encoding"]["tooltip"][1]["field"], "level_1");
        assert_eq!(spec["params"][0]["bind"], "scales");
        assert_eq!(spec["data"]["values"].as_array().unwrap().len(), 16);
    }

    #[test]
    fn test_feature_errors() {
        let data = cars().unwrap();
        assert_eq!(
            error_message(&data, &CorrMapOptions::new(["Horsepower"])),
            "There should be at least 2 features in the list"
        );
        assert_eq!(
            error_message(&data, &CorrMapOptions::new(["Horsepower", "Torque"])),
            "Feature 'Torque' is not a column of the input dataframe"
        );
        assert_eq!(
            error_message(&data, &CorrMapOptions::new(["Horsepower", "Name"])),
            "All features in the list should be numeric"
        );
    }

    #[test]
    fn test_method_parse_error() {
        let err = "linear".parse::<CorrMethod>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "The correlation method should be 'pearson', 'kendall', or 'spearman'"
        );
    }

    #[test]
    fn test_option_errors() {
        let data = cars().unwrap();
        let base = CorrMapOptions::new(features());

        let options = CorrMapOptions {
            color_scheme: String::new(),
            ..base.clone()
        };
        assert_eq!(
            error_message(&data, &options),
            "The color scheme should be given as a non-empty string"
        );

        let options = CorrMapOptions {
            title: String::new(),
            ..base.clone()
        };
        assert_eq!(
            error_message(&data, &options),
            "The title should be given as a non-empty string"
        );

        let options = CorrMapOptions {
            plot_width: 0,
            ..base.clone()
        };
        assert_eq!(
            error_message(&data, &options),
            "The plot_width should be given as a positive integer"
        );

        let options = CorrMapOptions {
            plot_height: 0,
            ..base
        };
        assert_eq!(
            error_message(&data, &options),
            "The plot_height should be given as a positive integer"
        );
    }

    #[test]
    fn test_options_from_json() {
        let options: CorrMapOptions = serde_json::from_str(
            r#"{"features": ["Horsepower", "Cylinders"], "corr_method": "kendall"}"#,
        )
        .unwrap();
        assert_eq!(options.corr_method, CorrMethod::Kendall);
        assert_eq!(options.title, "Correlation Map");
    }
}
