use prometheus::{Counter, Encoder, Histogram, HistogramOpts, Registry, TextEncoder};
use std::sync::Arc;

pub struct MetricsCollector {
    registry: Registry,

    // Generation metrics
    pub generate_requests: Counter,
    pub records_generated: Counter,
    pub generate_duration: Histogram,

    // Template store metrics
    pub template_saves: Counter,
    pub template_deletes: Counter,
}

impl MetricsCollector {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let generate_requests = Counter::new(
            "tyche_generate_requests_total",
            "Total number of generation requests",
        )?;
        registry.register(Box::new(generate_requests.clone()))?;

        let records_generated = Counter::new(
            "tyche_records_generated_total",
            "Total number of mock records generated",
        )?;
        registry.register(Box::new(records_generated.clone()))?;

        let generate_duration = Histogram::with_opts(HistogramOpts::new(
            "tyche_generate_duration_seconds",
            "Generation request duration in seconds",
        ))?;
        registry.register(Box::new(generate_duration.clone()))?;

        let template_saves = Counter::new(
            "tyche_template_saves_total",
            "Total number of templates saved",
        )?;
        registry.register(Box::new(template_saves.clone()))?;

        let template_deletes = Counter::new(
            "tyche_template_deletes_total",
            "Total number of templates deleted",
        )?;
        registry.register(Box::new(template_deletes.clone()))?;

        Ok(Self {
            registry,
            generate_requests,
            records_generated,
            generate_duration,
            template_saves,
            template_deletes,
        })
    }

    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

pub struct MetricsHandler {
    collector: Arc<MetricsCollector>,
}

impl MetricsHandler {
    pub fn new(collector: Arc<MetricsCollector>) -> Self {
        Self { collector }
    }

    pub async fn metrics(&self) -> String {
        self.collector.encode().unwrap_or_else(|e| {
            tracing::error!("Failed to encode metrics: {}", e);
            String::from("# Error encoding metrics\n")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_collector_creation() {
        let collector = MetricsCollector::new();
        assert!(collector.is_ok());
    }

    #[test]
    fn test_metrics_encoding() {
        let collector = MetricsCollector::new().unwrap();

        collector.generate_requests.inc();
        collector.records_generated.inc_by(25.0);

        let encoded = collector.encode().unwrap();
        assert!(encoded.contains("tyche_generate_requests_total"));
        assert!(encoded.contains("tyche_records_generated_total"));
    }

    #[tokio::test]
    async fn test_metrics_handler() {
        let collector = Arc::new(MetricsCollector::new().unwrap());
        let handler = MetricsHandler::new(collector.clone());

        collector.template_saves.inc();

        let metrics = handler.metrics().await;
        assert!(metrics.contains("tyche_template_saves_total"));
    }
}
