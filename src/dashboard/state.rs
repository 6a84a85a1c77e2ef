use futures::future::join_all;
use serde_json::{Map, Number, Value};

use crate::dashboard::api::{ApiClient, ApiError};
use crate::dashboard::forms::{FieldKind, ModalKind};
use crate::db::models::{
    Billing, Channel, Customer, Employee, Episode, Installation, Package, PackageSummary, Show,
    Subscription,
};

/// The demo panel polls function endpoints for the first few rows only.
pub const DEMO_ROWS: usize = 3;

/// Recorded per-row when a demo function poll fails; one bad row never
/// aborts the rest of the batch.
pub const POLL_ERROR_SENTINEL: &str = "ERROR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Dashboard,
    Customers,
    Employees,
    Installations,
    Shows,
    Episodes,
    Packages,
    Channels,
    Subscriptions,
    Billing,
    Procedures,
}

/// Entities the gateway exposes a delete operation for. The rest have no
/// delete contract, so the client offers none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Customer,
    Employee,
    Channel,
}

/// One in-memory collection per entity, in whatever order the gateway
/// returned them. Server order is authoritative; nothing is re-sorted here.
#[derive(Debug, Default, Clone)]
pub struct Collections {
    pub customers: Vec<Customer>,
    pub employees: Vec<Employee>,
    pub installations: Vec<Installation>,
    pub shows: Vec<Show>,
    pub episodes: Vec<Episode>,
    pub packages: Vec<Package>,
    pub channels: Vec<Channel>,
    pub subscriptions: Vec<Subscription>,
    pub billings: Vec<Billing>,
    pub package_summary: Vec<PackageSummary>,
}

/// An open modal: its operation tag plus the user's field entries, ordered
/// as the form schema orders them.
#[derive(Debug, Clone)]
pub struct ModalForm {
    pub kind: ModalKind,
    values: Vec<(String, String)>,
}

impl ModalForm {
    pub fn new(kind: ModalKind) -> Self {
        let values = kind
            .spec()
            .fields
            .iter()
            .map(|field| (field.name.to_string(), String::new()))
            .collect();
        ModalForm { kind, values }
    }

    /// Sets a field by wire name; names outside the schema are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(entry) = self.values.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.into();
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Builds the request body. Untouched fields are omitted, mirroring a
    /// form that only submits what the user entered; `Number` fields are
    /// encoded as JSON numbers when they parse.
    pub fn body(&self) -> Value {
        let mut object = Map::new();
        for field in self.kind.spec().fields {
            let Some(raw) = self.get(field.name) else {
                continue;
            };
            if raw.is_empty() {
                continue;
            }
            let value = match field.kind {
                FieldKind::Number => encode_number(raw),
                FieldKind::Text | FieldKind::Date => Value::String(raw.to_string()),
            };
            object.insert(field.name.to_string(), value);
        }
        Value::Object(object)
    }
}

fn encode_number(raw: &str) -> Value {
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(float) = raw.parse::<f64>() {
        if let Some(number) = Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    // Let the gateway reject it with a real error instead of guessing.
    Value::String(raw.to_string())
}

pub struct Dashboard {
    client: ApiClient,
    pub collections: Collections,
    pub active_view: ActiveView,
    pub modal: Option<ModalForm>,
    /// Customer_ID -> "1"/"0"/"ERROR", from HasActiveInstallation polling.
    pub install_statuses: Vec<(String, String)>,
    /// Subscription_Id -> status string or "ERROR", from GetSubscriptionStatus.
    pub subscription_statuses: Vec<(String, String)>,
    /// First result set of the most recent procedure call, verbatim.
    pub procedure_results: Option<Value>,
}

impl Dashboard {
    pub fn new(client: ApiClient) -> Self {
        Dashboard {
            client,
            collections: Collections::default(),
            active_view: ActiveView::Dashboard,
            modal: None,
            install_statuses: Vec::new(),
            subscription_statuses: Vec::new(),
            procedure_results: None,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Fetches every collection concurrently and replaces local state only
    /// once all of them have arrived. A single failure fails the whole load
    /// and leaves no partial result behind.
    pub async fn load_all(&mut self) -> Result<(), ApiError> {
        let (
            customers,
            employees,
            installations,
            shows,
            episodes,
            packages,
            channels,
            subscriptions,
            billings,
            package_summary,
        ) = tokio::try_join!(
            self.client.list_customers(),
            self.client.list_employees(),
            self.client.list_installations(),
            self.client.list_shows(),
            self.client.list_episodes(),
            self.client.list_packages(),
            self.client.list_channels(),
            self.client.list_subscriptions(),
            self.client.list_billing(),
            self.client.package_summary(),
        )?;
        self.collections = Collections {
            customers,
            employees,
            installations,
            shows,
            episodes,
            packages,
            channels,
            subscriptions,
            billings,
            package_summary,
        };
        Ok(())
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn open_modal(&mut self, kind: ModalKind) {
        self.open_modal_with(kind, &[]);
    }

    /// Opens a modal with some fields prefilled (e.g. adding an episode from
    /// a show row carries that show's id into the form).
    pub fn open_modal_with(&mut self, kind: ModalKind, prefill: &[(&str, &str)]) {
        let mut form = ModalForm::new(kind);
        for (name, value) in prefill {
            form.set(name, *value);
        }
        self.procedure_results = None;
        self.modal = Some(form);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.procedure_results = None;
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if let Some(form) = self.modal.as_mut() {
            form.set(name, value);
        }
    }

    /// Submits the open modal to its registered endpoint. On success the
    /// modal closes and every collection is re-fetched; on failure the error
    /// is returned and the modal stays open for a manual retry. The
    /// channels-by-city lookup is read-only: its results are kept for
    /// display, the modal stays open, and nothing is refreshed.
    pub async fn submit_modal(&mut self) -> Result<(), ApiError> {
        let Some(form) = self.modal.as_ref() else {
            return Ok(());
        };
        let kind = form.kind;
        let spec = kind.spec();
        let response = self.client.post_json(spec.endpoint, &form.body()).await?;

        if kind.is_procedure() {
            self.procedure_results = Some(
                response
                    .get("results")
                    .cloned()
                    .unwrap_or(response),
            );
            if kind == ModalKind::ChannelsByCity {
                return Ok(());
            }
        }

        self.modal = None;
        self.load_all().await
    }

    /// Deletes one row by key, then re-fetches everything.
    pub async fn delete_record(&mut self, target: DeleteTarget, id: &str) -> Result<(), ApiError> {
        match target {
            DeleteTarget::Customer => self.client.delete_customer(id).await?,
            DeleteTarget::Employee => self.client.delete_employee(id).await?,
            DeleteTarget::Channel => self.client.delete_channel(id).await?,
        };
        self.load_all().await
    }

    /// Fans out the demo function polls: HasActiveInstallation for the first
    /// few customers and GetSubscriptionStatus for the first few
    /// subscriptions, all concurrently. A request that fails records the
    /// ERROR sentinel for its row only.
    pub async fn poll_demo_statuses(&mut self) {
        let customer_ids: Vec<String> = self
            .collections
            .customers
            .iter()
            .take(DEMO_ROWS)
            .map(|c| c.customer_id.clone())
            .collect();
        let subscription_ids: Vec<String> = self
            .collections
            .subscriptions
            .iter()
            .take(DEMO_ROWS)
            .map(|s| s.subscription_id.clone())
            .collect();

        let install_polls = customer_ids.into_iter().map(|id| {
            let client = &self.client;
            async move {
                let status = match client.has_active_installation(&id).await {
                    Ok(response) => installed_badge(response.installed),
                    Err(_) => POLL_ERROR_SENTINEL.to_string(),
                };
                (id, status)
            }
        });
        let status_polls = subscription_ids.into_iter().map(|id| {
            let client = &self.client;
            async move {
                let status = match client.subscription_status(&id).await {
                    Ok(response) => response
                        .status
                        .unwrap_or_else(|| POLL_ERROR_SENTINEL.to_string()),
                    Err(_) => POLL_ERROR_SENTINEL.to_string(),
                };
                (id, status)
            }
        });

        let (install_statuses, subscription_statuses) =
            tokio::join!(join_all(install_polls), join_all(status_polls));
        self.install_statuses = install_statuses;
        self.subscription_statuses = subscription_statuses;
    }
}

/// The engine reports `installed` as a boolean or 0/1; render truthy values
/// as their own text and everything else as "0", as the original UI did.
fn installed_badge(installed: Option<Value>) -> String {
    match installed {
        Some(Value::Bool(true)) => "true".to_string(),
        Some(Value::Number(n)) if n.as_i64().unwrap_or(0) != 0 => n.to_string(),
        _ => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_body_omits_untouched_fields() {
        let mut form = ModalForm::new(ModalKind::AddCustomer);
        form.set("Customer_ID", "C105");
        form.set("First_Name", "Jack");
        let body = form.body();
        assert_eq!(body["Customer_ID"], "C105");
        assert_eq!(body["First_Name"], "Jack");
        assert!(body.get("Last_Name").is_none());
        assert!(body.get("Age").is_none());
    }

    #[test]
    fn number_fields_encode_as_json_numbers() {
        let mut form = ModalForm::new(ModalKind::AddPackage);
        form.set("Package_Id", "P004");
        form.set("Duration", "12");
        form.set("Cost", "99.99");
        let body = form.body();
        assert_eq!(body["Duration"], serde_json::json!(12));
        assert_eq!(body["Cost"], serde_json::json!(99.99));
    }

    #[test]
    fn unparsable_number_passes_through_for_the_gateway_to_reject() {
        let mut form = ModalForm::new(ModalKind::AddPackage);
        form.set("Cost", "ninety-nine");
        assert_eq!(form.body()["Cost"], "ninety-nine");
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut form = ModalForm::new(ModalKind::AddEmployee);
        form.set("Nonexistent", "x");
        assert!(form.get("Nonexistent").is_none());
    }

    #[test]
    fn prefilled_fields_survive_modal_open() {
        let client = ApiClient::new("http://localhost:3001", std::time::Duration::from_secs(5))
            .unwrap();
        let mut dashboard = Dashboard::new(client);
        dashboard.open_modal_with(ModalKind::AddEpisode, &[("Show_Id", "SH01")]);
        let form = dashboard.modal.as_ref().unwrap();
        assert_eq!(form.get("Show_Id"), Some("SH01"));
    }

    #[test]
    fn installed_badge_renders_truthiness() {
        assert_eq!(installed_badge(Some(Value::Bool(true))), "true");
        assert_eq!(installed_badge(Some(serde_json::json!(1))), "1");
        assert_eq!(installed_badge(Some(serde_json::json!(0))), "0");
        assert_eq!(installed_badge(Some(Value::Null)), "0");
        assert_eq!(installed_badge(None), "0");
    }
}
