use crate::chart::{Font, HoverLabel, MarkerColor, MarkerSize, Points, Series, SeriesKind, format_value};
use crate::types::{CountryRecord, Dataset, Selection};

const BASELINE_COLOR: &str = "#bbbbbb";
const HIGHLIGHT_SIZE: f64 = 15.0;
const HOVER_FONT_SIZE: f64 = 20.0;

/// The grey "everyone" series: all countries ordered by migration, lowest first.
pub fn baseline_series(dataset: &Dataset) -> Series {
    let mut sorted: Vec<&CountryRecord> = dataset.records().iter().collect();
    // stable: ties keep file order
    sorted.sort_by(|a, b| a.migration.total_cmp(&b.migration));

    let x = sorted.iter().map(|r| r.country.clone()).collect();
    let y = sorted.iter().map(|r| r.migration).collect();

    let mut series = Series::markers(SeriesKind::Scatter, "", Points::Categorical { x, y });
    series.showlegend = Some(false);
    series.hoverlabel = Some(HoverLabel { font: Font::sized(HOVER_FONT_SIZE) });
    series.marker.color = Some(MarkerColor::Fixed(BASELINE_COLOR.into()));
    series
}

/// One enlarged, legend-labelled series per selected country, alphabetical by name.
///
/// Names that match nothing in the dataset are skipped.
pub fn selection_series(dataset: &Dataset, selection: &Selection) -> Vec<Series> {
    selection.iter()
        .filter_map(|country| highlight_series(dataset, country))
        .collect()
}

fn highlight_series(dataset: &Dataset, country: &str) -> Option<Series> {
    let matches: Vec<&CountryRecord> = dataset.matching(country).collect();
    if matches.is_empty() {
        return None;
    }

    let x = matches.iter().map(|r| r.country.clone()).collect();
    let y = matches.iter().map(|r| r.migration).collect();

    let mut series = Series::markers(SeriesKind::Scatter, country, Points::Categorical { x, y });
    series.text = matches.iter()
        .map(|r| format!("{}: {}", r.country, format_value(r.migration)))
        .collect();
    series.hoverinfo = Some("text".into());
    series.hoverlabel = Some(HoverLabel { font: Font::sized(HOVER_FONT_SIZE) });
    series.marker.size = Some(MarkerSize::Fixed(HIGHLIGHT_SIZE));
    Some(series)
}
