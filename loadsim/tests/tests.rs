#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use hold_rs::manifest::CargoManifest;
    use hold_rs::navigator::SimulationSession;
    use hold_rs::strategies::StrategyId;
    use loadsim::config::LoadSimConfig;
    use loadsim::io;
    use loadsim::io::svg_util::{ChartOptions, ThemePreset};
    use loadsim::setup::run_setup;
    use loadsim::stepper::{StepperExit, run_interactive};

    fn sample_session() -> SimulationSession {
        SimulationSession::start(&CargoManifest::with_sample_data()).unwrap()
    }

    fn run_script(session: &mut SimulationSession, script: &str) -> String {
        run_script_until_exit(session, script).1
    }

    fn run_script_until_exit(session: &mut SimulationSession, script: &str) -> (StepperExit, String) {
        let mut output = Vec::new();
        let exit = run_interactive(
            session,
            &LoadSimConfig::default(),
            &mut Cursor::new(script.to_string()),
            &mut output,
        )
        .unwrap();
        (exit, String::from_utf8(output).unwrap())
    }

    #[test]
    fn simulation_is_written_as_json_and_svg() {
        let dir = tempfile::tempdir().unwrap();
        let session = sample_session();
        io::write_simulation(&session, &LoadSimConfig::default(), "sample", dir.path()).unwrap();

        let json: serde_json::Value = io::read_json(&dir.path().join("sim_sample.json")).unwrap();
        assert_eq!(json["manifest"]["capacity"], 50.0);
        assert_eq!(json["greedy"].as_array().unwrap().len(), 5);
        assert_eq!(json["naive"].as_array().unwrap().len(), 4);
        assert_eq!(json["greedy"][4]["title"], "Step 4: Partial Cement Blocks");
        let pct = json["comparison"]["percentage_improvement"].as_f64().unwrap();
        assert!(approx_eq!(f64, pct, 8.5106, epsilon = 1e-3));
        assert_eq!(json["config"]["display_precision"], 1);

        assert!(dir.path().join("cmp_sample.svg").exists());
    }

    #[test]
    fn svg_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoadSimConfig {
            write_svg: false,
            ..LoadSimConfig::default()
        };
        io::write_simulation(&sample_session(), &config, "nosvg", dir.path()).unwrap();
        assert!(dir.path().join("sim_nosvg.json").exists());
        assert!(!dir.path().join("cmp_nosvg.svg").exists());
    }

    #[test]
    fn manifest_file_is_imported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harbour.json");
        std::fs::write(
            &path,
            r##"{
                "name": "harbour",
                "capacity": 25,
                "cargo": [
                    {"name": "Spices", "weight": 5, "profit": 50, "color": "#112233"},
                    {"name": "Coal", "weight": 40, "profit": 40}
                ]
            }"##,
        )
        .unwrap();

        let manifest = hold_rs::io::import(&io::read_manifest(&path).unwrap()).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.items()[0].color().to_string(), "#112233");

        let session = SimulationSession::start(&manifest).unwrap();
        let cmp = session.comparison();
        // greedy takes all spices and 20 of the 40 tons of coal, naive stops at the coal
        assert!(approx_eq!(f64, cmp.greedy_profit, 70.0));
        assert!(approx_eq!(f64, cmp.naive_profit, 50.0));
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"capacity": "fifty"}"#).unwrap();
        assert!(io::read_manifest(&path).is_err());
        assert!(io::read_manifest(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: LoadSimConfig =
            serde_json::from_str(r#"{"display_precision": 2, "chart": {"width": 640}}"#).unwrap();
        assert_eq!(config.display_precision, 2);
        assert_eq!(config.progress_bar_width, 40);
        assert_eq!(config.chart.width, 640.0);
        assert_eq!(config.chart.height, 300.0);
        assert!(config.chart.step_dots);
        assert_eq!(config.chart.theme, ThemePreset::Harbour);
        assert_eq!(config.chart, ChartOptions { width: 640.0, ..ChartOptions::default() });
    }

    #[test]
    fn chart_theme_is_selected_by_name() {
        let config: LoadSimConfig =
            serde_json::from_str(r#"{"chart": {"theme": "gray", "step_dots": false}}"#).unwrap();
        assert_eq!(config.chart.theme, ThemePreset::Gray);
        assert!(!config.chart.step_dots);
        assert!(serde_json::from_str::<LoadSimConfig>(r#"{"chart": {"theme": "neon"}}"#).is_err());
    }

    #[test]
    fn interactive_session_reaches_the_comparison() {
        let mut session = sample_session();
        let out = run_script(&mut session, "n\nn\nn\nn\nn\nq\n");

        assert!(out.contains("Step 4: Partial Cement Blocks"));
        assert!(out.contains("Final comparison"));
        assert!(session.navigator().is_at_end());
    }

    #[test]
    fn interactive_session_reports_unknown_commands() {
        let mut session = sample_session();
        let out = run_script(&mut session, "jump\nnaive\n");

        assert!(out.contains("unknown command 'jump'"));
        assert_eq!(session.navigator().active(), StrategyId::Naive);
        assert_eq!(session.navigator().index(), 0);
    }

    #[test_case("n\nback\nn\n", StepperExit::Back; "back")]
    #[test_case("n\nq\nn\n", StepperExit::Quit; "quit")]
    #[test_case("n\nn\n", StepperExit::Quit; "end of input")]
    fn interactive_session_exits(script: &str, expected: StepperExit) {
        let mut session = sample_session();
        let (exit, _) = run_script_until_exit(&mut session, script);
        assert_eq!(exit, expected);
    }

    #[test]
    fn back_returns_to_the_setup_on_the_same_input() {
        let mut manifest = CargoManifest::with_sample_data();
        let mut input = Cursor::new("s\nn\nback\ncap 10\ns\nv\nn\nq\n".to_string());
        let mut output = Vec::new();
        let config = LoadSimConfig::default();

        let mut first = run_setup(&mut manifest, &mut input, &mut output).unwrap().unwrap();
        let exit = run_interactive(&mut first, &config, &mut input, &mut output).unwrap();
        assert_eq!(exit, StepperExit::Back);
        assert_eq!(first.navigator().index(), 1);

        let mut second = run_setup(&mut manifest, &mut input, &mut output).unwrap().unwrap();
        assert_eq!(second.instance().capacity(), 10.0);
        let exit = run_interactive(&mut second, &config, &mut input, &mut output).unwrap();
        assert_eq!(exit, StepperExit::Quit);
        assert_eq!(second.navigator().active(), StrategyId::Naive);
        assert!(second.navigator().is_at_end());
    }

    #[test_case("n\np\np\n", 0; "retreat past the start")]
    #[test_case("n\nn\nr\n", 0; "reset")]
    #[test_case("n\nn\nn\n", 3; "three steps")]
    #[test_case("n\nv\nn\n", 1; "switch resets")]
    fn interactive_navigation(script: &str, expected_index: usize) {
        let mut session = sample_session();
        run_script(&mut session, script);
        assert_eq!(session.navigator().index(), expected_index);
    }
}
