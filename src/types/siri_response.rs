#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

/// SIRI-Lite wraps most scalars as `{ "value": ... }`.
#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiriValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SiriValue {
    pub fn new(value: &str) -> Self {
        SiriValue {
            value: Some(value.to_string()),
        }
    }
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitoredCall {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ExpectedDepartureTime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub AimedDepartureTime: Option<String>,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitoredVehicleJourney {
    pub LineRef: SiriValue,
    pub DestinationName: Vec<SiriValue>,
    pub MonitoredCall: MonitoredCall,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitoredStopVisit {
    pub MonitoredVehicleJourney: MonitoredVehicleJourney,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StopMonitoringDelivery {
    pub MonitoredStopVisit: Vec<MonitoredStopVisit>,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StopMonitoringServiceDelivery {
    pub StopMonitoringDelivery: Vec<StopMonitoringDelivery>,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StopMonitoringSiri {
    pub ServiceDelivery: StopMonitoringServiceDelivery,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GetStopMonitoringResponse {
    pub Siri: StopMonitoringSiri,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct InfoMessageText {
    pub MessageText: SiriValue,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct InfoMessageContent {
    pub Message: Vec<InfoMessageText>,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct InfoMessageIdentifier {
    pub InfoChannelRef: SiriValue,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct InfoMessage {
    pub InfoMessageIdentifier: InfoMessageIdentifier,
    pub Content: InfoMessageContent,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GeneralMessageDelivery {
    pub InfoMessage: Vec<InfoMessage>,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GeneralMessageServiceDelivery {
    pub GeneralMessageDelivery: Vec<GeneralMessageDelivery>,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GeneralMessageSiri {
    pub ServiceDelivery: GeneralMessageServiceDelivery,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GetGeneralMessageResponse {
    pub Siri: GeneralMessageSiri,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_envelope_has_no_delivery() {
        let body: GetStopMonitoringResponse = serde_json::from_str("{}").unwrap();
        assert!(body.Siri.ServiceDelivery.StopMonitoringDelivery.is_empty());

        let body: GetGeneralMessageResponse = serde_json::from_str("{}").unwrap();
        assert!(body.Siri.ServiceDelivery.GeneralMessageDelivery.is_empty());
    }

    #[test]
    fn parses_upstream_visit() {
        let raw = r#"{
            "Siri": {
                "ServiceDelivery": {
                    "ResponseTimestamp": "2024-01-15T14:00:00Z",
                    "StopMonitoringDelivery": [{
                        "MonitoredStopVisit": [{
                            "RecordedAtTime": "2024-01-15T14:00:00Z",
                            "MonitoredVehicleJourney": {
                                "LineRef": { "value": "STIF:Line::C01742:" },
                                "DestinationName": [{ "value": "Aéroport CDG 2" }],
                                "MonitoredCall": {
                                    "AimedDepartureTime": "2024-01-15T14:30:00.000Z"
                                }
                            }
                        }]
                    }]
                }
            }
        }"#;

        let body: GetStopMonitoringResponse = serde_json::from_str(raw).unwrap();
        let visit = &body.Siri.ServiceDelivery.StopMonitoringDelivery[0].MonitoredStopVisit[0];
        let journey = &visit.MonitoredVehicleJourney;

        assert_eq!(journey.LineRef.value.as_deref(), Some("STIF:Line::C01742:"));
        assert_eq!(
            journey.DestinationName[0].value.as_deref(),
            Some("Aéroport CDG 2")
        );
        assert!(journey.MonitoredCall.ExpectedDepartureTime.is_none());
    }
}
