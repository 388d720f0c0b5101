use bpmtoms::converter::ConverterState;
use bpmtoms::object::{assist, AssistKind, BpmToMs, INLET_COUNT, OUTLET_COUNT};
use bpmtoms::outlet::{ChannelOutlet, RecordingOutlet};
use crossbeam::channel;

#[test]
fn test_object_shape() {
    assert_eq!(INLET_COUNT, 3);
    assert_eq!(OUTLET_COUNT, 1);
    for i in 0..INLET_COUNT {
        assert!(assist(AssistKind::Inlet, i).is_some());
    }
    assert!(assist(AssistKind::Inlet, INLET_COUNT).is_none());
}

#[test]
fn test_one_emission_per_accepted_input() {
    let mut object = BpmToMs::create(RecordingOutlet::new());

    assert_eq!(object.int(0, 2).unwrap(), Some(250.0));
    assert_eq!(object.int(0, 9).unwrap(), None);
    assert_eq!(object.float(1, 0.0).unwrap(), None);
    assert_eq!(object.int(2, 4).unwrap(), Some(1000.0));
    assert_eq!(object.int(5, 4).unwrap(), None);
    assert_eq!(object.float(1, 60.0).unwrap(), Some(2000.0));

    assert_eq!(object.outlet().values(), &[250.0, 1000.0, 2000.0]);
}

#[test]
fn test_custom_fraction_above_whole_note_still_emits() {
    let mut object = BpmToMs::create(RecordingOutlet::new());
    assert_eq!(object.float(0, 2.0).unwrap(), Some(500.0));
    assert_eq!(object.state().beat_fraction, 0.25);
    assert_eq!(object.outlet().last(), Some(500.0));
}

#[test]
fn test_with_state_starts_from_given_values() {
    let state = ConverterState::new(0.5, 2.0, 100.0).unwrap();
    let mut object = BpmToMs::with_state(state, RecordingOutlet::new());
    assert_eq!(object.state(), state);
    assert_eq!(object.bang().unwrap(), 2400.0);
}

#[test]
fn test_triplet_fraction() {
    let mut object = BpmToMs::create(RecordingOutlet::new());
    object.int(1, 100).unwrap();
    let ms = object.float(0, 1.0 / 6.0).unwrap().unwrap();
    // Quarter-note triplet at 100 BPM: two thirds of 600 ms
    assert!((ms - 400.0).abs() < 1e-9);
}

#[test]
fn test_channel_outlet_receives_emissions() {
    let (tx, rx) = channel::unbounded();
    let mut object = BpmToMs::create(ChannelOutlet::new(tx));

    object.int(1, 60).unwrap();
    object.int(2, 3).unwrap();
    object.int(0, 0).unwrap();
    drop(object.destroy());

    let received: Vec<f64> = rx.iter().collect();
    assert_eq!(received, vec![1000.0, 3000.0]);
}

#[test]
fn test_disconnected_outlet_reports_error() {
    let (tx, rx) = channel::unbounded();
    drop(rx);
    let mut object = BpmToMs::create(ChannelOutlet::new(tx));

    assert!(object.int(1, 60).is_err());
    assert!(object.float(0, 0.5).is_err());
    // A refused value leaves the state as it was before the message
    assert_eq!(object.state(), ConverterState::default());

    // Ignored input never touches the outlet
    assert_eq!(object.int(1, -60).unwrap(), None);
}
