//! End-to-end forwarding checks over a recorded engine: a small planar
//! frame is defined, loaded, run and queried, and the recorded call stream
//! is checked against the vendor method paths and encodings.

use sap_oapi::bridge::recording::RecordingEngine;
use sap_oapi::definitions::CaseLoad;
use sap_oapi::prelude::*;

fn sap() -> (std::rc::Rc<RecordingEngine>, Sap2000) {
    let _ = env_logger::builder().is_test(true).try_init();
    let (engine, handle) = RecordingEngine::handle();
    engine.stub(
        "SapModel.PointObj.AddCartesian",
        Reply::with_outs(0, vec![Value::Str("1".into())]),
    );
    (engine, Sap2000::with_handle(handle))
}

#[test]
fn test_portal_frame_definition_stream() {
    let (engine, sap) = sap();

    let (added, dups) = sap
        .add_joints(&[
            vec![0.0, 0.0],
            vec![0.0, 3.0],
            vec![4.0, 3.0],
            vec![4.0, 0.0],
            vec![0.0, 0.0],
        ])
        .unwrap();
    assert_eq!((added, dups), (4, 1));

    sap.point
        .set
        .restraint("1", &["UX", "UZ", "RY"], ItemType::Object)
        .unwrap();
    sap.load_patterns
        .add("DEAD", LoadPatternType::Dead, 1.0, true)
        .unwrap();
    sap.load_cases.static_linear.set_case("DEAD").unwrap();
    sap.load_cases
        .static_linear
        .set_loads("DEAD", &[CaseLoad::pattern("DEAD", 1.0)])
        .unwrap();
    sap.analyze.set_active_dof(&["UX", "UZ", "RY"]).unwrap();
    sap.analyze.set_run_all_cases_flag(true).unwrap();
    sap.analyze.run_analysis().unwrap();

    let methods: Vec<String> = engine.calls().into_iter().map(|c| c.method).collect();
    assert!(methods[..4]
        .iter()
        .all(|m| m == "SapModel.PointObj.AddCartesian"));
    assert!(methods.contains(&"SapModel.LoadPatterns.Add".to_string()));
    assert!(methods.contains(&"SapModel.LoadCases.StaticLinear.SetLoads".to_string()));
    assert_eq!(methods.last().unwrap(), "SapModel.Analyze.RunAnalysis");

    // The restraint and active-DOF masks carry the same plane-frame pattern.
    let mask = Value::Bools(vec![true, false, true, false, true, false]);
    let restraint = engine
        .calls()
        .into_iter()
        .find(|c| c.method == "SapModel.PointObj.SetRestraint")
        .unwrap();
    assert_eq!(restraint.args[1], mask);
    let active = engine
        .calls()
        .into_iter()
        .find(|c| c.method == "SapModel.Analyze.SetActiveDOF")
        .unwrap();
    assert_eq!(active.args[0], mask);
}

#[test]
fn test_results_selection_and_extraction() {
    let (engine, sap) = sap();
    engine.stub(
        "SapModel.Results.JointReact",
        Reply::with_outs(
            0,
            vec![
                Value::Strs(vec!["1".into()]),
                Value::Strs(vec!["1".into()]),
                Value::Strs(vec!["DEAD".into()]),
                Value::Strs(vec!["".into()]),
                Value::Nums(vec![0.0]),
                Value::Nums(vec![0.0]),
                Value::Nums(vec![0.0]),
                Value::Nums(vec![12.5]),
                Value::Nums(vec![0.0]),
                Value::Nums(vec![0.0]),
                Value::Nums(vec![0.0]),
            ],
        ),
    );

    sap.results.setup.deselect_all().unwrap();
    sap.results.setup.set_case_selected("DEAD", true).unwrap();
    let react = sap
        .results
        .joint_reaction("1", ItemTypeElm::ObjectElm)
        .unwrap();
    assert_eq!(react.ids.load_case, vec!["DEAD"]);
    assert_eq!(react.u3, vec![12.5]);
    assert_eq!(react.ret, 0);
}

#[test]
fn test_spectrum_case_wiring() {
    let (engine, sap) = sap();

    sap.functions
        .rs
        .user("EC8", &[0.1, 0.5, 1.0, 2.0], &[2.5, 2.5, 1.5, 0.75], 0.05)
        .unwrap();
    sap.load_cases.modal_eigen.set_case("MODAL").unwrap();
    sap.load_cases
        .modal_eigen
        .set_number_modes("MODAL", 12, 1)
        .unwrap();
    sap.load_cases.response_spectrum.set_case("RSX").unwrap();
    sap.load_cases
        .response_spectrum
        .set_modal_case("RSX", "MODAL")
        .unwrap();
    sap.load_cases
        .response_spectrum
        .set_loads("RSX", &[SpectrumLoad::new(Dof::U1, "EC8", 9.81)])
        .unwrap();
    sap.load_cases
        .response_spectrum
        .set_dir_comb("RSX", DirectionalCombo::Srss, 1.0)
        .unwrap();

    let dir_comb = engine.last_call().unwrap();
    assert_eq!(
        dir_comb.method,
        "SapModel.LoadCases.ResponseSpectrum.SetDirComb"
    );
    assert_eq!(dir_comb.args[1], Value::Int(1));

    let loads = engine
        .calls()
        .into_iter()
        .find(|c| c.method == "SapModel.LoadCases.ResponseSpectrum.SetLoads")
        .unwrap();
    assert_eq!(loads.args[2], Value::Strs(vec!["U1".into()]));
}
