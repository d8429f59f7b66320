//! Tests for command helpers

use super::*;
use crate::events::{normalize_row, HitEvent, RawRow};

fn event(batter: &str, pitcher: &str, outcome: &str) -> HitEvent {
    normalize_row(
        1,
        RawRow {
            batter: batter.to_string(),
            pitcher: pitcher.to_string(),
            game_date: 44197.0,
            exit_speed: 101.37,
            launch_angle: 27.5,
            hit_distance: 350.0,
            exit_direction: 0.0,
            play_outcome: Some(outcome.to_string()),
            video_link: None,
        },
    )
    .unwrap()
}

#[cfg(test)]
mod resolve_tests {
    use super::*;

    #[test]
    fn test_resolve_data_path_prefers_argument() {
        let path = resolve_data_path(Some(PathBuf::from("events.csv"))).unwrap();
        assert_eq!(path, PathBuf::from("events.csv"));
    }

    // Env var cases share one test so they don't race each other.
    #[test]
    fn test_resolve_data_path_from_env() {
        std::env::set_var(DATA_ENV_VAR, "/tmp/spray.json");
        let path = resolve_data_path(None).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/spray.json"));

        std::env::set_var(DATA_ENV_VAR, "   ");
        assert!(resolve_data_path(None).is_err());

        std::env::remove_var(DATA_ENV_VAR);
        match resolve_data_path(None).unwrap_err() {
            ChartError::MissingDataPath { env_var } => assert_eq!(env_var, DATA_ENV_VAR),
            other => panic!("Expected MissingDataPath error, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod handler_tests {
    use super::*;
    use crate::dataset::Dataset;

    fn dataset() -> Dataset {
        Dataset::from_events(vec![
            event("Ronald Acuna", "Zack Wheeler", "HomeRun"),
            event("Ronald Acuna", "Max Fried", "Single"),
        ])
    }

    #[test]
    fn test_format_event_line() {
        let line = search::format_event_line(&event("Ronald Acuna", "Zack Wheeler", "HomeRun"));
        assert!(line.starts_with("  1/1/2021"));
        assert!(line.contains("vs Zack Wheeler"));
        assert!(line.contains("HomeRun"));
        assert!(line.contains("350.0 ft"));
        assert!(line.contains("EV 101.4 mph"));
    }

    #[test]
    fn test_render_batter_svg() {
        let svg = plot::render_batter_svg(&dataset(), "ronald acuna")
            .unwrap()
            .unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("class=\"hit\"").count(), 2);
    }

    #[test]
    fn test_render_unknown_batter_is_none() {
        assert!(plot::render_batter_svg(&dataset(), "Nobody")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_handle_plot_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("chart.svg");
        plot::handle_plot(&dataset(), "Ronald Acuna", &out).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("</svg>"));
    }

    #[test]
    fn test_handlers_require_batter() {
        assert!(matches!(
            search::handle_search(&dataset(), "", false),
            Err(ChartError::MissingParameter { .. })
        ));
        assert!(search::handle_search(&dataset(), "  ", false).is_ok());
        assert!(matches!(
            videos::handle_videos(&dataset(), "Ronald Acuna", Some(""), false),
            Err(ChartError::MissingParameter { .. })
        ));
    }
}
