use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tripwiz_core::{Effect, Msg, Suggestion};
use tripwiz_engine::{EngineEvent, EngineHandle, FetchSettings, SuggestPayload};
use tripwiz_logging::{trip_info, trip_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(settings);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchSuggestions {
                    request_id,
                    destination,
                } => {
                    trip_info!(
                        "FetchSuggestions request_id={} destination={}",
                        request_id,
                        destination
                    );
                    self.engine.fetch(request_id, destination);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let _ = msg_tx.send(event_to_msg(event));
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchDone { request_id, result } => match result {
            Ok(SuggestPayload::Suggestions(records)) => Msg::FetchSucceeded {
                request_id,
                suggestions: records.into_iter().map(to_core_suggestion).collect(),
            },
            Ok(SuggestPayload::Text(body)) => {
                trip_warn!(
                    "request {} answered with a non-JSON body ({} bytes); treating it as no matches",
                    request_id,
                    body.len()
                );
                Msg::FetchSucceeded {
                    request_id,
                    suggestions: Vec::new(),
                }
            }
            Err(error) => {
                trip_warn!("request {} failed: {}", request_id, error.kind);
                Msg::FetchFailed {
                    request_id,
                    error: format!("suggestion lookup failed: {}", error.kind),
                }
            }
        },
    }
}

fn to_core_suggestion(record: tripwiz_engine::Suggestion) -> Suggestion {
    Suggestion {
        city_name: record.city_name,
        country_id: record.country_id,
        country_name: record.country_name,
        entity_id: record.entity_id,
        hierarchy: record.hierarchy,
        iata_code: record.iata_code,
        location: record.location,
        name: record.name,
        kind: record.kind,
    }
}
