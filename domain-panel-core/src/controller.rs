//! Panel controller
//!
//! Holds the panel state (domain list, selection, search filter, record
//! list, record editor modal) and drives every operation against the
//! [`DomainApi`] port. User feedback goes through the [`Notifier`] port;
//! the frontend reads the rest of the state through getters each frame.

use std::sync::Arc;

use log::{error, warn};

use crate::error::{PanelError, PanelResult};
use crate::traits::{DomainApi, Notifier};
use crate::types::{
    DnsRecord, Domain, Nameserver, RecordPayload, RecordType, RenewalSettings, DEFAULT_TTL,
};

/// Editable form backing the record modal.
///
/// Numeric fields stay as strings while editing; parsing and defaulting
/// happen once at submit time.
#[derive(Debug, Clone)]
pub struct RecordForm {
    pub name: String,
    pub record_type: RecordType,
    pub value: String,
    pub ttl: String,
    pub priority: String,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            record_type: RecordType::A,
            value: String::new(),
            ttl: DEFAULT_TTL.to_string(),
            priority: String::new(),
        }
    }
}

impl RecordForm {
    #[must_use]
    pub fn from_record(record: &DnsRecord) -> Self {
        Self {
            name: record.name.clone(),
            record_type: record.record_type,
            value: record.value.clone(),
            ttl: record.ttl.to_string(),
            priority: record.priority.map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    /// Advances the type selector, clearing priority when leaving MX
    pub fn cycle_type(&mut self) {
        self.record_type = self.record_type.next();
        if !self.record_type.requires_priority() {
            self.priority.clear();
        }
    }

    /// Builds the request body. An unparsable TTL falls back to the
    /// default; priority is only carried for MX and only when it parses.
    #[must_use]
    pub fn to_payload(&self) -> RecordPayload {
        let priority = if self.record_type.requires_priority() {
            self.priority.trim().parse().ok()
        } else {
            None
        };
        RecordPayload {
            name: self.name.trim().to_string(),
            record_type: self.record_type,
            value: self.value.trim().to_string(),
            ttl: self.ttl.trim().parse().unwrap_or(DEFAULT_TTL),
            priority,
        }
    }
}

/// Record editor modal state machine
#[derive(Debug, Clone)]
pub enum RecordModal {
    Closed,
    Open {
        /// `Some(id)` when editing an existing record
        editing: Option<u64>,
        form: RecordForm,
    },
}

impl RecordModal {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

pub struct PanelController {
    api: Arc<dyn DomainApi>,
    notifier: Arc<dyn Notifier>,

    domains: Vec<Domain>,
    /// Ids of domains matching the current query, in list order
    filtered: Vec<u64>,
    query: String,
    current: Option<u64>,
    records: Vec<DnsRecord>,
    modal: RecordModal,

    /// In-flight operation depth; the notifier only sees 0<->1 edges
    busy: usize,
    /// Bumped on every selection change to invalidate in-flight record loads
    generation: u64,
}

impl PanelController {
    pub fn new(api: Arc<dyn DomainApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            domains: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            current: None,
            records: Vec::new(),
            modal: RecordModal::Closed,
            busy: 0,
            generation: 0,
        }
    }

    // ===== Domain list =====

    /// Reloads the domain list.
    ///
    /// On failure the list is cleared and an empty state is rendered; no
    /// placeholder data is substituted. If the previous selection no
    /// longer exists the first visible domain is selected instead.
    pub async fn load_domains(&mut self) -> PanelResult<()> {
        self.begin_busy();
        let result = self.api.list_domains().await;
        self.end_busy();

        match result {
            Ok(domains) => {
                self.domains = domains;
                self.apply_filter();
                let current_visible = self
                    .current
                    .is_some_and(|id| self.filtered.contains(&id));
                if !current_visible {
                    self.current = None;
                    self.records.clear();
                    if let Some(first) = self.filtered.first().copied() {
                        self.select_domain(first).await?;
                    }
                }
                Ok(())
            }
            Err(e) => {
                self.domains.clear();
                self.filtered.clear();
                self.current = None;
                self.records.clear();
                self.report(&e);
                Err(e)
            }
        }
    }

    /// Selects a domain by id and loads its records.
    ///
    /// An unknown id reports one error and leaves all state untouched.
    pub async fn select_domain(&mut self, id: u64) -> PanelResult<()> {
        let Some(name) = self
            .domains
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.clone())
        else {
            let e = PanelError::DomainNotFound(id.to_string());
            self.report(&e);
            return Err(e);
        };

        self.begin_busy();
        let result = self.api.set_active_domain(&name).await;
        self.end_busy();
        if let Err(e) = result {
            self.report(&e);
            return Err(e);
        }

        self.current = Some(id);
        self.generation += 1;
        self.load_records().await
    }

    /// Updates the search query and recomputes the visible list.
    ///
    /// The query is trimmed and matched case-insensitively as a
    /// substring. When nothing matches, the selection and record list
    /// are cleared along with the visible list.
    pub fn search(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        self.apply_filter();
        if self.filtered.is_empty() {
            self.current = None;
            self.records.clear();
        }
    }

    fn apply_filter(&mut self) {
        self.filtered = self
            .domains
            .iter()
            .filter(|d| self.query.is_empty() || d.matches_query(&self.query))
            .map(|d| d.id)
            .collect();
    }

    // ===== DNS records =====

    /// Reloads the record list for the current selection.
    ///
    /// Responses arriving after the selection changed are discarded.
    pub async fn load_records(&mut self) -> PanelResult<()> {
        let generation = self.generation;
        self.load_records_for(generation).await
    }

    async fn load_records_for(&mut self, generation: u64) -> PanelResult<()> {
        if self.current.is_none() {
            self.records.clear();
            return Ok(());
        }

        self.begin_busy();
        let result = self.api.list_records().await;
        self.end_busy();

        if generation != self.generation {
            return Ok(());
        }
        match result {
            Ok(records) => {
                self.records = records;
                Ok(())
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    // ===== Record modal =====

    pub fn open_add_modal(&mut self) {
        self.modal = RecordModal::Open {
            editing: None,
            form: RecordForm::default(),
        };
    }

    /// Fetches the record and opens the modal prefilled with it
    pub async fn open_edit_modal(&mut self, id: u64) -> PanelResult<()> {
        self.begin_busy();
        let result = self.api.get_record(id).await;
        self.end_busy();

        match result {
            Ok(record) => {
                self.modal = RecordModal::Open {
                    editing: Some(id),
                    form: RecordForm::from_record(&record),
                };
                Ok(())
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = RecordModal::Closed;
    }

    /// Submits the open modal, creating or updating depending on how it
    /// was opened. The modal stays open on failure so input is not lost;
    /// on success it closes and the record list is reloaded.
    pub async fn submit_record(&mut self) -> PanelResult<()> {
        let RecordModal::Open { editing, ref form } = self.modal else {
            return Err(PanelError::ValidationError(
                "No record form is open".to_string(),
            ));
        };

        let payload = form.to_payload();
        if payload.value.is_empty() {
            let e = PanelError::ValidationError("Record value is required".to_string());
            self.report(&e);
            return Err(e);
        }

        self.begin_busy();
        let result = match editing {
            Some(id) => self.api.update_record(id, &payload).await,
            None => self.api.create_record(&payload).await,
        };
        self.end_busy();

        match result {
            Ok(()) => {
                self.modal = RecordModal::Closed;
                self.notifier.success(if editing.is_some() {
                    "Record updated"
                } else {
                    "Record created"
                });
                self.load_records().await
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    /// Deletes a record and reloads the list. Callers confirm first.
    pub async fn delete_record(&mut self, id: u64) -> PanelResult<()> {
        self.begin_busy();
        let result = self.api.delete_record(id).await;
        self.end_busy();

        match result {
            Ok(()) => {
                self.notifier.success("Record deleted");
                self.load_records().await
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    // ===== Nameservers and settings =====

    /// Replaces the nameserver set from raw form rows. Rows with an
    /// empty name are skipped; an empty ip becomes an absent glue entry.
    pub async fn submit_nameservers(&mut self, rows: &[(String, String)]) -> PanelResult<()> {
        let nameservers: Vec<Nameserver> = rows
            .iter()
            .filter(|(name, _)| !name.trim().is_empty())
            .map(|(name, ip)| Nameserver {
                name: name.trim().to_string(),
                ip: {
                    let ip = ip.trim();
                    if ip.is_empty() {
                        None
                    } else {
                        Some(ip.to_string())
                    }
                },
            })
            .collect();

        if nameservers.is_empty() {
            let e = PanelError::ValidationError("At least one nameserver is required".to_string());
            self.report(&e);
            return Err(e);
        }

        self.begin_busy();
        let result = self.api.update_nameservers(&nameservers).await;
        self.end_busy();

        match result {
            Ok(()) => {
                self.notifier.success("Nameservers updated");
                Ok(())
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    /// Saves renewal settings from raw form input
    pub async fn submit_settings(&mut self, enabled: bool, days_raw: &str) -> PanelResult<()> {
        let settings = RenewalSettings::from_form(enabled, days_raw);

        self.begin_busy();
        let result = self.api.update_settings(&settings).await;
        self.end_busy();

        match result {
            Ok(()) => {
                if let Some(domain) = self.current_domain_mut() {
                    domain.auto_renewal_enabled = settings.auto_renewal_enabled;
                }
                self.notifier.success("Settings saved");
                Ok(())
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    /// Toggles the transfer lock optimistically, reverting on failure
    pub async fn toggle_domain_lock(&mut self) -> PanelResult<()> {
        let Some(enabled) = self.flip_flag(|d| {
            d.lock_enabled = !d.lock_enabled;
            d.lock_enabled
        }) else {
            return Err(PanelError::NoDomainSelected);
        };

        self.begin_busy();
        let result = self.api.set_domain_lock(enabled).await;
        self.end_busy();

        match result {
            Ok(()) => {
                self.notifier.success(if enabled {
                    "Domain locked"
                } else {
                    "Domain unlocked"
                });
                Ok(())
            }
            Err(e) => {
                self.flip_flag(|d| {
                    d.lock_enabled = !d.lock_enabled;
                    d.lock_enabled
                });
                self.report(&e);
                Err(e)
            }
        }
    }

    /// Toggles auto-renewal optimistically, reverting on failure
    pub async fn toggle_auto_renewal(&mut self) -> PanelResult<()> {
        let Some(enabled) = self.flip_flag(|d| {
            d.auto_renewal_enabled = !d.auto_renewal_enabled;
            d.auto_renewal_enabled
        }) else {
            return Err(PanelError::NoDomainSelected);
        };

        self.begin_busy();
        let result = self.api.set_auto_renewal(enabled).await;
        self.end_busy();

        match result {
            Ok(()) => {
                self.notifier.success(if enabled {
                    "Auto-renewal enabled"
                } else {
                    "Auto-renewal disabled"
                });
                Ok(())
            }
            Err(e) => {
                self.flip_flag(|d| {
                    d.auto_renewal_enabled = !d.auto_renewal_enabled;
                    d.auto_renewal_enabled
                });
                self.report(&e);
                Err(e)
            }
        }
    }

    fn flip_flag(&mut self, f: impl FnOnce(&mut Domain) -> bool) -> Option<bool> {
        self.current_domain_mut().map(f)
    }

    // ===== Busy tracking and error reporting =====

    fn begin_busy(&mut self) {
        self.busy += 1;
        if self.busy == 1 {
            self.notifier.busy_changed(true);
        }
    }

    fn end_busy(&mut self) {
        self.busy = self.busy.saturating_sub(1);
        if self.busy == 0 {
            self.notifier.busy_changed(false);
        }
    }

    /// Logs the error and surfaces exactly one notification for it
    fn report(&self, e: &PanelError) {
        if e.is_expected() {
            warn!("{e}");
        } else {
            error!("{e}");
        }
        self.notifier.error(&e.to_string());
    }

    // ===== Getters =====

    #[must_use]
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Domains matching the current query, in list order
    pub fn filtered_domains(&self) -> impl Iterator<Item = &Domain> {
        self.filtered
            .iter()
            .filter_map(|id| self.domains.iter().find(|d| d.id == *id))
    }

    #[must_use]
    pub fn current_domain(&self) -> Option<&Domain> {
        self.current
            .and_then(|id| self.domains.iter().find(|d| d.id == id))
    }

    fn current_domain_mut(&mut self) -> Option<&mut Domain> {
        let id = self.current?;
        self.domains.iter_mut().find(|d| d.id == id)
    }

    #[must_use]
    pub fn records(&self) -> &[DnsRecord] {
        &self.records
    }

    #[must_use]
    pub fn modal(&self) -> &RecordModal {
        &self.modal
    }

    /// Mutable access to the open form, for key-by-key editing
    pub fn modal_form_mut(&mut self) -> Option<&mut RecordForm> {
        match &mut self.modal {
            RecordModal::Open { form, .. } => Some(form),
            RecordModal::Closed => None,
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy > 0
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}
