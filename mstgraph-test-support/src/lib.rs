//! Shared test utilities used across mstgraph crates.

pub mod tracing {
    //! In-memory tracing layer for asserting on instrumentation in tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer that keeps every closed span and emitted event.
    ///
    /// Clones share storage, so a test can install one clone in a subscriber
    /// and inspect another once the instrumented code has run.
    ///
    /// # Examples
    /// ```
    /// use mstgraph_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     let _span = tracing::info_span!("session.clear", vertices = 3_u64).entered();
    ///     tracing::debug!(removed = 3_u64, "cleared");
    /// });
    ///
    /// let span = layer.span_named("session.clear").expect("span recorded");
    /// assert_eq!(span.fields.get("vertices").map(String::as_str), Some("3"));
    /// assert_eq!(layer.events().len(), 1);
    /// ```
    #[derive(Clone, Debug, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Returns the closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.spans().into_iter().find(|span| span.name == name)
        }

        /// Returns the events emitted at exactly `level`.
        #[must_use]
        pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
            self.events()
                .into_iter()
                .filter(|event| event.level == level)
                .collect()
        }
    }

    /// A closed span and the fields recorded against it over its lifetime.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the callsite metadata.
        pub name: String,
        /// Field values rendered as strings.
        pub fields: HashMap<String, String>,
    }

    /// An emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Field values rendered as strings, including `message`.
        pub fields: HashMap<String, String>,
    }

    struct OpenSpan(SpanRecord);

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = HashMap::new();
            attrs.record(&mut FieldRecorder(&mut fields));
            span.extensions_mut().insert(OpenSpan(SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields,
            }));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldRecorder(&mut record.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(OpenSpan(record)) = span.extensions_mut().remove::<OpenSpan>() else {
                return;
            };
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(record);
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            let metadata = event.metadata();
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(EventRecord {
                    level: *metadata.level(),
                    target: metadata.target().to_owned(),
                    fields,
                });
        }
    }

    struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

    impl FieldRecorder<'_> {
        fn insert(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.insert(field, value.to_string());
        }
    }
}

pub mod ci;
