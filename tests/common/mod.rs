#![allow(dead_code)]

use payleap::PayLeapGateway;
use payleap::domain::card::{Address, CreditCard, ExpiryDate};
use payleap::domain::credentials::{GatewayCredentials, Mode};
use payleap::domain::operation::TransactionOptions;
use payleap::infrastructure::in_memory::RecordingTransport;

pub const SUCCESSFUL_PURCHASE_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Response xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns="http://TPISoft.com/SmartPayments/">
  <Result>0</Result>
  <RespMSG>Approved</RespMSG>
  <Message>Approved</Message>
  <AuthCode>562</AuthCode>
  <PNRef>331</PNRef>
  <HostCode />
  <GetAVSResult>0</GetAVSResult>
  <GetAVSResultTXT>Issuer did not perform AVS</GetAVSResultTXT>
  <GetStreetMatchTXT>Service Not Requested</GetStreetMatchTXT>
  <GetZipMatchTXT>Service Not Requested</GetZipMatchTXT>
  <GetCVResult>U</GetCVResult>
  <GetCVResultTXT>Service Not Requested</GetCVResultTXT>
  <GetCommercialCard>False</GetCommercialCard>
  <ExtData>CardType=AMEX</ExtData>
</Response>"#;

pub const FAILED_PURCHASE_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Response xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns="http://TPISoft.com/SmartPayments/">
  <Result>113</Result>
  <RespMSG>Cannot Exceed Sales Cap</RespMSG>
  <Message>Requested Refund Exceeds Available Refund Amount</Message>
  <AuthCode>Cannot_Exceed_Sales_Cap</AuthCode>
  <PNRef>329</PNRef>
  <GetCommercialCard>False</GetCommercialCard>
  <ExtData>CardType=AMEX</ExtData>
</Response>"#;

pub const CVV_MISMATCH_RESPONSE: &str = r#"<Response>
  <Result>12</Result>
  <Message>Declined</Message>
  <GetAVSResult>Y</GetAVSResult>
  <GetCVResult>N</GetCVResult>
</Response>"#;

pub fn credit_card() -> CreditCard {
    CreditCard {
        number: "374255312721002".to_string(),
        expiry: ExpiryDate::new(10, 2009).unwrap(),
        verification_value: Some("123".to_string()),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
    }
}

pub fn options() -> TransactionOptions {
    TransactionOptions {
        invoice: Some("1".to_string()),
        customer: None,
        billing_address: Some(Address {
            address1: Some("456 My Street".to_string()),
            address2: Some("Apt 1".to_string()),
            city: Some("Ottawa".to_string()),
            state: Some("ON".to_string()),
            zip: Some("K1C2N6".to_string()),
        }),
        address: None,
    }
}

pub fn gateway(transport: &RecordingTransport) -> PayLeapGateway {
    PayLeapGateway::new(
        GatewayCredentials::new("login", "password").unwrap(),
        Mode::Test,
        Box::new(transport.clone()),
    )
}
