extern crate bpmtoms;

use bpmtoms::event_loop::{EventLoop, HostMessage};
use bpmtoms::message::InletMessage;
use bpmtoms::object::BpmToMs;
use bpmtoms::outlet::{ChannelOutlet, RecordingOutlet};
use bpmtoms::{create_scheduler, host, ConverterState, Scheduler};
use crossbeam::channel;
use std::io::Cursor;

#[test]
fn integration_test_event_loop_processes_in_order() {
    let (out_tx, out_rx) = channel::unbounded();
    let object = BpmToMs::create(ChannelOutlet::new(out_tx));
    let (engine_tx, engine_rx) = channel::unbounded::<HostMessage>();
    let event_loop = EventLoop::new(object, engine_rx);

    let scheduler = create_scheduler();
    let (state_tx, state_rx) = channel::bounded(1);
    let handle = scheduler
        .spawn("event-loop", move || {
            let state = event_loop.run().expect("event loop failed");
            state_tx.send(state).unwrap();
        })
        .unwrap();

    engine_tx.send(InletMessage::int(2, 2).into()).unwrap();
    engine_tx.send(InletMessage::int(1, 60).into()).unwrap();
    engine_tx.send(InletMessage::float(1, -1.0).into()).unwrap();
    engine_tx.send(HostMessage::Dump).unwrap();
    engine_tx.send(HostMessage::Bang).unwrap();

    // Close the channel so that the event loop will exit.
    drop(engine_tx);
    handle.join().expect("Event loop thread panicked");

    let final_state = state_rx.recv().unwrap();
    assert_eq!(final_state.steps, 2.0);
    assert_eq!(final_state.tempo_bpm, 60.0);

    let outputs: Vec<f64> = out_rx.iter().collect();
    assert_eq!(outputs, vec![1000.0, 2000.0, 2000.0]);
}

#[test]
fn integration_test_quit_stops_before_later_messages() {
    let (tx, rx) = channel::unbounded::<HostMessage>();
    tx.send(InletMessage::int(1, 60).into()).unwrap();
    tx.send(HostMessage::Quit).unwrap();
    tx.send(InletMessage::int(1, 30).into()).unwrap();

    let object = BpmToMs::create(RecordingOutlet::new());
    let state = EventLoop::new(object, rx).run().unwrap();
    assert_eq!(state.tempo_bpm, 60.0);
}

#[test]
fn integration_test_disconnected_outlet_ends_loop_with_error() {
    let (out_tx, out_rx) = channel::unbounded::<f64>();
    drop(out_rx);
    let (tx, rx) = channel::unbounded::<HostMessage>();
    tx.send(InletMessage::int(0, 3).into()).unwrap();
    drop(tx);

    let object = BpmToMs::create(ChannelOutlet::new(out_tx));
    assert!(EventLoop::new(object, rx).run().is_err());
}

#[test]
fn integration_test_reader_feeds_event_loop() {
    let input = Cursor::new(
        "# dotted eighth, 4 steps, 90 BPM\n0 0.1875\n2 4\n1 90\n0 7\nbogus line\n",
    );
    let (tx, rx) = channel::unbounded();
    let scheduler = create_scheduler();
    let reader = host::spawn_reader(&scheduler, input, tx).unwrap();

    let state = EventLoop::new(BpmToMs::create(RecordingOutlet::new()), rx)
        .run()
        .unwrap();
    reader.join().unwrap();

    assert_eq!(state, ConverterState::new(0.1875, 4.0, 90.0).unwrap());
    assert_eq!(state.milliseconds(), 2000.0);
}
