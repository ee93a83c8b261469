//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for billz operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns session state**: the invoice store, the loaded configuration, the demo
//!   mode switch and the sample generator
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., `key=value` arguments into raw records)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr or terminal handling
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Sessions
//!
//! Entity state lives for the lifetime of one `BillzApi` value. Only configuration
//! is persisted, under the config directory the API was created with.
//!
//! ## Testing Strategy
//!
//! API tests verify that each method reaches the right command with the right
//! session state (defaults from config, demo mode, top-n). Command logic is tested
//! in the command modules.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::rngs::StdRng;

use crate::commands::{self, helpers::record_from_pairs, CmdMessage, CmdResult};
use crate::config::BillzConfig;
use crate::error::Result;
use crate::factory::RawRecord;
use crate::invoice::{invoice_collection, Invoice};
use crate::sample::SampleGenerator;
use crate::store::Store;
use crate::views::FormModel;

/// The main API facade for billz operations.
pub struct BillzApi {
    store: Store<Invoice>,
    config: BillzConfig,
    config_dir: PathBuf,
    demo_mode: bool,
    generator: SampleGenerator<StdRng>,
}

impl BillzApi {
    /// Starts a session with the configuration found in `config_dir`.
    pub fn open(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.into();
        let config = BillzConfig::load(&config_dir)?;
        Self::with_config(config, config_dir)
    }

    pub fn with_config(config: BillzConfig, config_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            store: Store::new(invoice_collection()?),
            demo_mode: config.demo_mode,
            config,
            config_dir: config_dir.into(),
            generator: SampleGenerator::from_entropy(),
        })
    }

    /// Replaces the sample generator with a deterministic one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.generator = SampleGenerator::seeded(seed);
        self
    }

    pub fn store(&self) -> &Store<Invoice> {
        &self.store
    }

    pub fn config(&self) -> &BillzConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub fn set_demo_mode(&mut self, on: bool) -> CmdResult {
        self.demo_mode = on;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Demo mode {}",
            if on { "on" } else { "off" }
        )));
        result
    }

    pub fn create_invoice(&mut self, record: &RawRecord) -> Result<CmdResult> {
        let defaults = self.config.factory_defaults();
        commands::create::run(&mut self.store, record, Utc::now(), &defaults)
    }

    pub fn create_from_pairs<I: AsRef<str>>(&mut self, pairs: &[I]) -> Result<CmdResult> {
        let (record, rejected) = record_from_pairs(pairs);
        let mut result = self.create_invoice(&record)?;
        prepend_rejected(&mut result, rejected);
        Ok(result)
    }

    /// Creates an invoice from a collected form, overlaid with `key=value` pairs.
    pub fn create_from_form<I: AsRef<str>>(
        &mut self,
        form: &FormModel,
        pairs: &[I],
    ) -> Result<CmdResult> {
        let (overrides, rejected) = record_from_pairs(pairs);
        let mut record = form.collect();
        record.extend(overrides);
        let mut result = self.create_invoice(&record)?;
        prepend_rejected(&mut result, rejected);
        Ok(result)
    }

    /// An empty form over the invoice schema.
    pub fn blank_form(&self) -> FormModel {
        FormModel::for_collection(self.store.collection())
    }

    /// A form pre-filled with generated sample data. `None` outside demo mode.
    pub fn sample_form(&mut self) -> Option<FormModel> {
        if !self.demo_mode {
            return None;
        }
        let mut form = self.blank_form();
        form.load_record(&self.generator.record(Utc::now()));
        Some(form)
    }

    /// A form pre-filled with the invoice `id`, for editing.
    pub fn edit_form(&self, id: &str) -> Option<FormModel> {
        let collection = self.store.collection();
        collection
            .get_by_id(id)
            .map(|invoice| FormModel::for_entity(collection, invoice))
    }

    pub fn list_invoices(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_invoice(&self, id: &str) -> Result<CmdResult> {
        commands::show::run(&self.store, id)
    }

    pub fn filter(&mut self, status: Option<&str>) -> Result<CmdResult> {
        commands::filter::run(&mut self.store, status)
    }

    pub fn summary(&self) -> Result<CmdResult> {
        commands::summary::run(&self.store, self.config.top_n)
    }

    pub fn remove_invoices<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, ids)
    }

    pub fn modify_invoice<I: AsRef<str>>(&mut self, id: &str, pairs: &[I]) -> Result<CmdResult> {
        let (record, rejected) = record_from_pairs(pairs);
        let mut result = commands::modify::run(&mut self.store, id, &record)?;
        prepend_rejected(&mut result, rejected);
        Ok(result)
    }

    /// Applies the edited entries of a form to an existing invoice.
    pub fn modify_from_form(&mut self, id: &str, form: &FormModel) -> Result<CmdResult> {
        commands::modify::run(&mut self.store, id, &form.collect_changes())
    }

    /// Generates `count` sample invoices, or the configured burst size.
    pub fn generate_samples(&mut self, count: Option<usize>) -> Result<CmdResult> {
        let count = count.unwrap_or(self.config.sample_count);
        let defaults = self.config.factory_defaults();
        commands::sample::run(
            &mut self.store,
            &mut self.generator,
            count,
            self.demo_mode,
            Utc::now(),
            &defaults,
        )
    }

    pub fn export(&self) -> Result<CmdResult> {
        commands::export::run(&self.store)
    }

    pub fn fields(&self) -> Result<CmdResult> {
        commands::fields::run(self.store.collection())
    }

    pub fn transition_log(&self, limit: Option<usize>) -> Result<CmdResult> {
        commands::log::run(&self.store, limit)
    }

    /// Runs a config action and refreshes the session's configuration.
    ///
    /// The session's demo mode switch is left alone; it only takes its initial value
    /// from configuration.
    pub fn config_action(&mut self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

fn prepend_rejected(result: &mut CmdResult, rejected: Vec<String>) {
    if rejected.is_empty() {
        return;
    }
    let mut messages: Vec<CmdMessage> = rejected
        .into_iter()
        .map(|arg| CmdMessage::warning(format!("Expected key=value, got: {arg}")))
        .collect();
    messages.append(&mut result.messages);
    result.messages = messages;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config::ConfigAction;
    use crate::commands::MessageLevel;
    use crate::invoice::InvoiceStatus;
    use serde_json::json;
    use tempfile::tempdir;

    fn api() -> (BillzApi, tempfile::TempDir) {
        let temp = tempdir().unwrap();
        let api = BillzApi::with_config(BillzConfig::default(), temp.path())
            .unwrap()
            .with_seed(9);
        (api, temp)
    }

    #[test]
    fn test_create_from_pairs_reports_malformed_arguments() {
        let (mut api, _temp) = api();
        let result = api
            .create_from_pairs(&["id=INV-1", "value=10", "oops"])
            .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("oops"));
        assert_eq!(api.store().entities().len(), 1);
    }

    #[test]
    fn test_create_uses_configured_defaults() {
        let temp = tempdir().unwrap();
        let config = BillzConfig {
            default_currency: "CAD".into(),
            ..Default::default()
        };
        let mut api = BillzApi::with_config(config, temp.path()).unwrap();
        let result = api.create_from_pairs(&["id=A", "value=1"]).unwrap();
        assert_eq!(result.affected[0].currency.as_deref(), Some("CAD"));
    }

    #[test]
    fn test_samples_follow_demo_mode() {
        let (mut api, _temp) = api();
        assert!(api.sample_form().is_none());
        let result = api.generate_samples(Some(3)).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);

        api.set_demo_mode(true);
        let form = api.sample_form().unwrap();
        assert!(form.collect().contains_key("customerName"));
        api.generate_samples(Some(3)).unwrap();
        assert_eq!(api.store().entities().len(), 3);
    }

    #[test]
    fn test_sample_burst_defaults_to_config() {
        let temp = tempdir().unwrap();
        let config = BillzConfig {
            demo_mode: true,
            sample_count: 4,
            ..Default::default()
        };
        let mut api = BillzApi::with_config(config, temp.path()).unwrap();
        assert!(api.demo_mode());
        api.generate_samples(None).unwrap();
        assert_eq!(api.store().entities().len(), 4);
    }

    #[test]
    fn test_create_from_form_overlays_pairs() {
        let (mut api, _temp) = api();
        api.set_demo_mode(true);
        let form = api.sample_form().unwrap();
        let result = api
            .create_from_form(&form, &["id=INV-X", "currency=EUR"])
            .unwrap();
        let created = &result.affected[0];
        assert_eq!(created.id, "INV-X");
        assert_eq!(created.currency.as_deref(), Some("EUR"));
        assert!(!created.customer_name.is_empty());
    }

    #[test]
    fn test_summary_uses_configured_top_n() {
        let temp = tempdir().unwrap();
        let config = BillzConfig {
            top_n: 1,
            ..Default::default()
        };
        let mut api = BillzApi::with_config(config, temp.path()).unwrap();
        api.create_from_pairs(&["id=a", "value=5"]).unwrap();
        api.create_from_pairs(&["id=b", "value=7"]).unwrap();
        let result = api.summary().unwrap();
        let all = result.summaries.last().unwrap();
        assert_eq!(all.top.len(), 1);
        assert_eq!(all.top[0].id, "b");
    }

    #[test]
    fn test_edit_form_round_trips_through_modify() {
        let (mut api, _temp) = api();
        api.create_from_pairs(&["id=INV-1", "value=10", "status=due"])
            .unwrap();
        let mut form = api.edit_form("INV-1").unwrap();
        form.set_live("status", json!("paid"));
        let result = api.modify_from_form("INV-1", &form).unwrap();
        assert_eq!(result.affected[0].status, InvoiceStatus::Paid);
        assert_eq!(result.affected[0].value, 10.0);
        assert!(api.edit_form("missing").is_none());
    }

    #[test]
    fn test_create_survives_out_of_range_due_term() {
        let temp = tempdir().unwrap();
        let config = BillzConfig {
            due_in_days: 100_000_000,
            ..BillzConfig::default()
        };
        let mut api = BillzApi::with_config(config, temp.path()).unwrap();
        let result = api.create_from_pairs(&["id=A", "value=1"]).unwrap();
        let invoice = &result.affected[0];
        assert_eq!(
            invoice.due_date - invoice.invoice_date,
            chrono::Duration::days(60)
        );
    }

    #[test]
    fn test_unchanged_edit_form_keeps_invoice_intact() {
        let (mut api, _temp) = api();
        api.create_from_pairs(&["id=A", "value=1", "invoiceDate=2024-02-10T15:30:00Z"])
            .unwrap();
        let before = api.store().collection().get_by_id("A").unwrap().clone();
        let log_len = api.store().log().len();

        let form = api.edit_form("A").unwrap();
        let result = api.modify_from_form("A", &form).unwrap();

        assert!(result.affected.is_empty());
        assert!(result.messages.iter().all(|m| m.content != "Ignored id"));
        assert_eq!(result.messages.last().unwrap().content, "Nothing to change");
        assert_eq!(api.store().log().len(), log_len);
        let after = api.store().collection().get_by_id("A").unwrap();
        assert_eq!(after.invoice_date, before.invoice_date);
        assert_eq!(after.due_date, before.due_date);
    }

    #[test]
    fn test_config_action_refreshes_session_config() {
        let (mut api, _temp) = api();
        api.config_action(ConfigAction::Set("top-n".into(), "6".into()))
            .unwrap();
        assert_eq!(api.config().top_n, 6);
        assert!(!api.demo_mode());
    }

    #[test]
    fn test_open_reads_config_dir() {
        let temp = tempdir().unwrap();
        BillzConfig::set(temp.path(), "demo-mode", "true").unwrap();
        let api = BillzApi::open(temp.path()).unwrap();
        assert!(api.demo_mode());
        assert_eq!(api.config_dir(), temp.path());
    }
}
