use crate::chart::{
    ChartPayload, Font, GeoLayout, Layout, Marker, MarkerColor, MarkerSize, Points, Series,
    SeriesKind, Title, format_value,
};
use crate::config::ChartConfig;
use crate::types::Dataset;

const MAP_WIDTH: u32 = 1420;
const MAP_HEIGHT: u32 = 750;
const BORDER_COLOR: &str = "#cccccc";

// Diverging; reversed so emigration is blue and immigration red.
const COLOR_SCALE: &str = "Bluered";

/// Builds the world map: one geo scatter series with a marker per country,
/// coloured by net migration and sized by its magnitude.
///
/// Computed once at startup; it does not depend on the selection.
pub fn build_map(config: &ChartConfig, dataset: &Dataset) -> ChartPayload {
    let records = dataset.records();

    let lon = records.iter().map(|r| r.lon).collect();
    let lat = records.iter().map(|r| r.lat).collect();
    let mut series = Series::markers(SeriesKind::Scattergeo, "", Points::Geo { lon, lat });

    series.text = records.iter()
        .map(|r| format!("{}<br>Net migration: {}", r.country, format_value(r.migration)))
        .collect();
    series.hoverinfo = Some("text".into());
    series.marker = Marker {
        size: Some(MarkerSize::PerPoint(
            records.iter().map(|r| marker_size(config, r.migration)).collect(),
        )),
        color: Some(MarkerColor::PerPoint(records.iter().map(|r| r.migration).collect())),
        colorscale: Some(COLOR_SCALE.into()),
        showscale: Some(true),
        reversescale: Some(true),
    };

    let mut layout = Layout::titled(Title::new(config.title.clone()));
    layout.font = Some(Font { family: Some(config.font_family.clone()), size: None });
    layout.paper_bgcolor = Some(config.background.clone());
    layout.width = Some(MAP_WIDTH);
    layout.height = Some(MAP_HEIGHT);
    layout.geo = Some(GeoLayout {
        showland: true,
        landcolor: config.background.clone(),
        showcountries: true,
        countrycolor: BORDER_COLOR.into(),
        showocean: true,
        oceancolor: config.background.clone(),
        showcoastlines: true,
        coastlinecolor: BORDER_COLOR.into(),
        showframe: false,
    });

    ChartPayload { series: vec![series], layout }
}

/// Marker diameter grows with |migration| but never drops below the floor.
fn marker_size(config: &ChartConfig, migration: f64) -> f64 {
    (migration * config.marker_scale).abs().max(config.marker_floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CountryRecord;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            CountryRecord { country: "Moldova".into(), lat: 47.0, lon: 29.0, migration: -9.26 },
            CountryRecord { country: "Aruba".into(), lat: 12.52, lon: -69.97, migration: 1.0 },
        ])
    }

    #[test]
    fn plots_every_country_at_lon_lat() {
        let map = build_map(&ChartConfig::default(), &dataset());
        assert_eq!(map.series.len(), 1);
        let series = &map.series[0];
        assert_eq!(series.kind, SeriesKind::Scattergeo);
        assert_eq!(
            series.points,
            Points::Geo { lon: vec![29.0, -69.97], lat: vec![47.0, 12.52] }
        );
    }

    #[test]
    fn hover_text_names_country_and_value() {
        let map = build_map(&ChartConfig::default(), &dataset());
        assert_eq!(
            map.series[0].text,
            vec!["Moldova<br>Net migration: -9.26", "Aruba<br>Net migration: 1.0"]
        );
        assert_eq!(map.series[0].hoverinfo.as_deref(), Some("text"));
    }

    #[test]
    fn colour_follows_migration_on_diverging_scale() {
        let map = build_map(&ChartConfig::default(), &dataset());
        let marker = &map.series[0].marker;
        assert_eq!(marker.color, Some(MarkerColor::PerPoint(vec![-9.26, 1.0])));
        assert_eq!(marker.colorscale.as_deref(), Some("Bluered"));
        assert_eq!(marker.showscale, Some(true));
    }

    #[test]
    fn marker_size_is_scaled_with_a_floor() {
        let config = ChartConfig::default();
        assert_eq!(marker_size(&config, 1.0), 7.0);
        assert_eq!(marker_size(&config, -0.5), 7.0);
        assert_eq!(marker_size(&config, -9.25), 37.0);
        assert_eq!(marker_size(&config, 2.5), 10.0);
    }

    #[test]
    fn layout_uses_configured_style() {
        let config = ChartConfig { background: "#fafafa".into(), ..ChartConfig::default() };
        let map = build_map(&config, &dataset());
        assert_eq!(map.layout.paper_bgcolor.as_deref(), Some("#fafafa"));
        let geo = map.layout.geo.unwrap();
        assert_eq!(geo.landcolor, "#fafafa");
        assert_eq!(geo.oceancolor, "#fafafa");
        assert!(!geo.showframe);
        assert_eq!(map.layout.width, Some(1420));
    }

    #[test]
    fn empty_dataset_gives_empty_series() {
        let map = build_map(&ChartConfig::default(), &Dataset::default());
        assert!(map.series[0].points.is_empty());
    }
}
