//! Span exporter that writes one JSON line per exported batch.

use super::trace_file::TraceFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Map, Value as Json};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug)]
pub struct SpanLineExporter {
    file: TraceFile,
    resource: Json,
    is_shutdown: bool,
}

impl SpanLineExporter {
    pub fn new(file: TraceFile, resource: &Resource) -> Self {
        let resource = resource
            .iter()
            .map(|(key, value)| (key.to_string(), attribute_json(value)))
            .collect::<Map<String, Json>>();

        Self {
            file,
            resource: Json::Object(resource),
            is_shutdown: false,
        }
    }

    fn batch_line(&self, batch: &[SpanData]) -> String {
        json!({
            "resource": self.resource,
            "spans": batch.iter().map(span_json).collect::<Vec<_>>(),
        })
        .to_string()
    }
}

impl SpanExporter for SpanLineExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("span exporter is shut down"))
        } else {
            let line = self.batch_line(&batch);
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }
}

fn span_json(span: &SpanData) -> Json {
    let parent = (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));
    let duration_us = span
        .end_time
        .duration_since(span.start_time)
        .map_or(0, |d| d.as_micros());

    json!({
        "trace_id": format!("{:032x}", span.span_context.trace_id()),
        "span_id": format!("{:016x}", span.span_context.span_id()),
        "parent_span_id": parent,
        "name": span.name,
        "start_unix_nano": unix_nanos(span.start_time).to_string(),
        "duration_us": duration_us.to_string(),
        "attributes": attributes_json(&span.attributes),
        "events": span.events.iter().map(|event| json!({
            "name": event.name,
            "unix_nano": unix_nanos(event.timestamp).to_string(),
            "attributes": attributes_json(&event.attributes),
        })).collect::<Vec<_>>(),
        "status": match &span.status {
            Status::Unset => Json::Null,
            Status::Ok => json!("ok"),
            Status::Error { description } => json!({ "error": description.to_string() }),
        },
    })
}

fn attributes_json(attributes: &[KeyValue]) -> Json {
    Json::Object(
        attributes
            .iter()
            .map(|kv| (kv.key.to_string(), attribute_json(&kv.value)))
            .collect(),
    )
}

fn attribute_json(value: &Value) -> Json {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        Value::Array(_) => json!(value.to_string()),
    }
}

fn unix_nanos(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_nanos())
}
