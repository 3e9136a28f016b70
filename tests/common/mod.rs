//! Spy transport and fixtures shared by the integration tests.
#![allow(dead_code)]

use invoicexpress::http::{HttpRequest, HttpResponse, Transport};
use invoicexpress::{ApiClient, Config};
use mockall::mock;

mock! {
    pub Http {}
    impl Transport for Http {
        fn send(&self, request: &HttpRequest) -> invoicexpress::Result<HttpResponse>;
    }
}

pub fn config() -> Config {
    Config::new("acme", "secret-key")
}

pub fn client(transport: MockHttp) -> ApiClient<MockHttp> {
    ApiClient::with_transport(config(), transport).unwrap()
}

/// A transport guide as the API returns it from `GET /transports/{id}.xml`.
pub const TRANSPORT_GUIDE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<transport>
  <id>1503698</id>
  <status>draft</status>
  <archived>false</archived>
  <type>Transport</type>
  <sequence_number>draft</sequence_number>
  <date>15/06/2024</date>
  <due_date>15/06/2024</due_date>
  <loaded_at>15/06/2024 08:30:00</loaded_at>
  <license_plate>AA-00-BB</license_plate>
  <reference>PO-2024-17</reference>
  <observations>Fragile</observations>
  <retention></retention>
  <tax_exemption>M01</tax_exemption>
  <permalink>https://acme.app.invoicexpress.com/documents/abc</permalink>
  <address_from>
    <detail>Rua A 1</detail>
    <city>Lisboa</city>
    <postal_code>1000-001</postal_code>
    <country>Portugal</country>
  </address_from>
  <address_to>
    <detail>Rua B 2</detail>
    <city>Porto</city>
    <postal_code>4000-002</postal_code>
    <country>Portugal</country>
  </address_to>
  <client>
    <id>4411</id>
    <name>Transportes Lda</name>
    <code>C-001</code>
  </client>
  <currency>Euro</currency>
  <items type="array">
    <item>
      <name>Pallet</name>
      <description>EUR pallet</description>
      <unit_price>10.0</unit_price>
      <quantity>3.0</quantity>
      <unit>unit</unit>
      <tax>
        <id>1</id>
        <name>IVA23</name>
        <value>23.0</value>
      </tax>
      <discount>0.0</discount>
      <subtotal>30.0</subtotal>
    </item>
  </items>
  <sum>30.0</sum>
  <discount>0.0</discount>
  <before_taxes>30.0</before_taxes>
  <taxes>6.9</taxes>
  <total>36.9</total>
  <timeline>
    <event><type>create</type></event>
  </timeline>
</transport>"#;
