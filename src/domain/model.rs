/// One temperature/humidity sample taken from the sensor page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub temperature: u32,
    pub humidity: u32,
}

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub url: String,
    pub body: String,
}

/// Label strings that precede each value in the sensor page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub temperature: String,
    pub humidity: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            temperature: "Temperature: ".to_string(),
            humidity: "humidity: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Entry id echoed by the telemetry service, if the reply body was numeric.
    pub entry_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub reading: Reading,
    pub receipt: PublishReceipt,
}
