use crate::chart::{Axis, ChartPayload, Font, Layout, Title};
use crate::config::ChartConfig;
use crate::processing::{baseline_series, selection_series};
use crate::types::{Dataset, Selection};
use std::sync::Arc;
use tracing::debug;

const TITLE_FONT_SIZE: f64 = 30.0;
const Y_AXIS_TITLE: &str = "Net Migrants per 1,000";

/// Recomputes the scatter chart whenever the dropdown changes.
///
/// Holds no state besides the shared, read-only dataset: every call receives
/// the complete current selection and builds the payload from scratch.
#[derive(Debug, Clone)]
pub struct SelectionController {
    dataset: Arc<Dataset>,
    chart: ChartConfig,
}

impl SelectionController {
    pub fn new(dataset: Arc<Dataset>, chart: ChartConfig) -> Self {
        Self { dataset, chart }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn on_selection_change(&self, selection: &Selection) -> ChartPayload {
        let baseline = baseline_series(&self.dataset);
        debug!("Selection of {} countries against {} baseline points", selection.len(), baseline.points.len());

        let mut series = vec![baseline];
        series.extend(selection_series(&self.dataset, selection));

        ChartPayload { series, layout: self.layout() }
    }

    fn layout(&self) -> Layout {
        let mut title = Title::new(self.chart.title.clone());
        title.font = Some(Font::sized(TITLE_FONT_SIZE));

        let mut layout = Layout::titled(title);
        layout.xaxis = Some(Axis {
            title: None,
            showticklabels: Some(false),
            zeroline: Some(false),
        });
        layout.yaxis = Some(Axis {
            title: Some(Title::new(Y_AXIS_TITLE)),
            ..Axis::default()
        });
        layout.font = Some(Font { family: Some(self.chart.font_family.clone()), size: None });
        layout.paper_bgcolor = Some(self.chart.background.clone());
        layout.plot_bgcolor = Some(self.chart.background.clone());
        layout.hovermode = Some("x".into());
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Points;
    use crate::types::CountryRecord;

    fn controller() -> SelectionController {
        let dataset = Dataset::new(vec![
            CountryRecord { country: "X".into(), lat: 1.0, lon: 2.0, migration: -5.0 },
            CountryRecord { country: "Y".into(), lat: 3.0, lon: 4.0, migration: 3.0 },
        ]);
        SelectionController::new(Arc::new(dataset), ChartConfig::default())
    }

    fn selection(names: &[&str]) -> Selection {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn baseline_plus_selected_country() {
        let payload = controller().on_selection_change(&selection(&["Y"]));
        assert_eq!(payload.series.len(), 2);
        assert_eq!(
            payload.series[0].points,
            Points::Categorical { x: vec!["X".into(), "Y".into()], y: vec![-5.0, 3.0] }
        );
        assert_eq!(payload.series[1].name, "Y");
        assert_eq!(
            payload.series[1].points,
            Points::Categorical { x: vec!["Y".into()], y: vec![3.0] }
        );
    }

    #[test]
    fn empty_selection_is_baseline_only() {
        let payload = controller().on_selection_change(&Selection::new());
        assert_eq!(payload.series.len(), 1);
        assert_eq!(payload.series[0].points.len(), 2);
    }

    #[test]
    fn unknown_country_is_baseline_only() {
        let payload = controller().on_selection_change(&selection(&["NotACountry"]));
        assert_eq!(payload.series.len(), 1);
    }

    #[test]
    fn same_selection_gives_identical_payload() {
        let controller = controller();
        let chosen = selection(&["Y", "X"]);
        assert_eq!(controller.on_selection_change(&chosen), controller.on_selection_change(&chosen));
    }

    #[test]
    fn layout_hides_x_ticks_and_hovers_on_x() {
        let payload = controller().on_selection_change(&Selection::new());
        let layout = payload.layout;
        assert_eq!(layout.hovermode.as_deref(), Some("x"));
        assert_eq!(layout.xaxis.as_ref().and_then(|a| a.showticklabels), Some(false));
        assert_eq!(
            layout.yaxis.and_then(|a| a.title).map(|t| t.text),
            Some("Net Migrants per 1,000".to_string())
        );
        assert_eq!(layout.title.font, Some(Font::sized(30.0)));
        assert_eq!(layout.plot_bgcolor.as_deref(), Some("#eeeeee"));
    }
}
