//! The closed set of modal operations and their form schemas. The original
//! UI hardcoded each tag's field list at the render site; here every tag
//! resolves through one declarative table instead.

/// How a field is captured and encoded into the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    /// Encoded as a JSON number (integer when possible, else float).
    Number,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name: the schema column name for entity creates, the routine
    /// parameter name for procedure calls.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy)]
pub struct FormSpec {
    pub title: &'static str,
    pub endpoint: &'static str,
    pub method: &'static str,
    pub fields: &'static [FieldSpec],
}

/// One tag per entity-create operation and one per stored procedure. There
/// is deliberately no edit tag: the gateway defines no update operation, so
/// the client offers no edit affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    AddCustomer,
    AddEmployee,
    AddPackage,
    AddChannel,
    AddInstallation,
    AddShow,
    AddEpisode,
    AddSubscription,
    AddBilling,
    NewCustomerSubscription,
    RecordNewPayment,
    ChannelsByCity,
}

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Text,
    }
}

const fn date(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Date,
    }
}

const fn number(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Number,
    }
}

impl ModalKind {
    pub const ALL: [ModalKind; 12] = [
        ModalKind::AddCustomer,
        ModalKind::AddEmployee,
        ModalKind::AddPackage,
        ModalKind::AddChannel,
        ModalKind::AddInstallation,
        ModalKind::AddShow,
        ModalKind::AddEpisode,
        ModalKind::AddSubscription,
        ModalKind::AddBilling,
        ModalKind::NewCustomerSubscription,
        ModalKind::RecordNewPayment,
        ModalKind::ChannelsByCity,
    ];

    /// True for tags that invoke a stored procedure rather than an insert.
    pub fn is_procedure(self) -> bool {
        matches!(
            self,
            ModalKind::NewCustomerSubscription
                | ModalKind::RecordNewPayment
                | ModalKind::ChannelsByCity
        )
    }

    pub fn spec(self) -> &'static FormSpec {
        match self {
            ModalKind::AddCustomer => &ADD_CUSTOMER,
            ModalKind::AddEmployee => &ADD_EMPLOYEE,
            ModalKind::AddPackage => &ADD_PACKAGE,
            ModalKind::AddChannel => &ADD_CHANNEL,
            ModalKind::AddInstallation => &ADD_INSTALLATION,
            ModalKind::AddShow => &ADD_SHOW,
            ModalKind::AddEpisode => &ADD_EPISODE,
            ModalKind::AddSubscription => &ADD_SUBSCRIPTION,
            ModalKind::AddBilling => &ADD_BILLING,
            ModalKind::NewCustomerSubscription => &NEW_CUSTOMER_SUBSCRIPTION,
            ModalKind::RecordNewPayment => &RECORD_NEW_PAYMENT,
            ModalKind::ChannelsByCity => &CHANNELS_BY_CITY,
        }
    }
}

const ADD_CUSTOMER: FormSpec = FormSpec {
    title: "Add Customer",
    endpoint: "/api/customers",
    method: "POST",
    // Age is absent: the engine derives it from Date_of_Birth.
    fields: &[
        text("Customer_ID", "Customer ID"),
        text("First_Name", "First Name"),
        text("Last_Name", "Last Name"),
        text("Phone_No", "Phone Number"),
        text("City", "City"),
        date("Date_of_Birth", "Date of Birth"),
    ],
};

const ADD_EMPLOYEE: FormSpec = FormSpec {
    title: "Add Employee",
    endpoint: "/api/employees",
    method: "POST",
    fields: &[
        text("Employee_Id", "Employee ID"),
        text("Name", "Full Name"),
        text("Contact", "Contact"),
    ],
};

const ADD_PACKAGE: FormSpec = FormSpec {
    title: "Add Package",
    endpoint: "/api/packages",
    method: "POST",
    fields: &[
        text("Package_Id", "Package ID"),
        text("Name", "Name"),
        number("Duration", "Duration (months)"),
        number("Cost", "Cost ($)"),
    ],
};

const ADD_CHANNEL: FormSpec = FormSpec {
    title: "Add Channel",
    endpoint: "/api/channels",
    method: "POST",
    fields: &[
        text("Channel_Id", "Channel ID"),
        text("Name", "Name"),
        text("Category", "Category"),
    ],
};

const ADD_INSTALLATION: FormSpec = FormSpec {
    title: "Schedule Installation",
    endpoint: "/api/installations",
    method: "POST",
    fields: &[
        text("Installation_Id", "Installation ID"),
        date("Date", "Date"),
        text("Customer_Id", "Customer ID"),
        text("Employee_Id", "Technician (Employee ID)"),
    ],
};

const ADD_SHOW: FormSpec = FormSpec {
    title: "Add Show",
    endpoint: "/api/shows",
    method: "POST",
    // Episode_Count is trigger-maintained, never entered.
    fields: &[
        text("Show_Id", "Show ID"),
        text("Channel_Id", "Channel ID"),
        text("Name", "Show Name"),
        text("Genre", "Genre"),
    ],
};

const ADD_EPISODE: FormSpec = FormSpec {
    title: "Add Episode",
    endpoint: "/api/episodes",
    method: "POST",
    fields: &[
        text("Show_Id", "Show ID"),
        number("Episode_No", "Episode No"),
        text("Title", "Title"),
        date("Air_Date", "Air Date"),
    ],
};

const ADD_SUBSCRIPTION: FormSpec = FormSpec {
    title: "Add Subscription",
    endpoint: "/api/subscriptions",
    method: "POST",
    fields: &[
        text("Subscription_Id", "Subscription ID"),
        text("Customer_Id", "Customer ID"),
        text("Package_Id", "Package ID"),
        date("Start_Date", "Start Date"),
        date("End_Date", "End Date"),
    ],
};

const ADD_BILLING: FormSpec = FormSpec {
    title: "Add Billing Record",
    endpoint: "/api/billing",
    method: "POST",
    fields: &[
        text("Billing_Id", "Billing ID"),
        text("Customer_Id", "Customer ID"),
        number("Amount", "Amount"),
        number("Discount", "Discount"),
        date("Date", "Date"),
    ],
};

const NEW_CUSTOMER_SUBSCRIPTION: FormSpec = FormSpec {
    title: "New Customer Signup",
    endpoint: "/api/procedures/new-customer-subscription",
    method: "POST",
    // Positional order of NewCustomerSubscription's parameters.
    fields: &[
        text("customer_id", "Customer ID"),
        text("first_name", "First Name"),
        text("phone_no", "Phone No"),
        text("city", "City"),
        date("date_of_birth", "Date of Birth"),
        text("package_id", "Package ID"),
        text("subscription_id", "Subscription ID"),
    ],
};

const RECORD_NEW_PAYMENT: FormSpec = FormSpec {
    title: "Record Payment",
    endpoint: "/api/procedures/record-payment",
    method: "POST",
    fields: &[
        text("billing_id", "Billing ID"),
        text("customer_id", "Customer ID"),
        number("amount", "Amount"),
        number("discount", "Discount"),
    ],
};

const CHANNELS_BY_CITY: FormSpec = FormSpec {
    title: "Check Channel Availability",
    endpoint: "/api/procedures/channels-by-city",
    method: "POST",
    fields: &[text("category", "Category"), text("city", "City")],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_resolves_to_a_complete_spec() {
        for kind in ModalKind::ALL {
            let spec = kind.spec();
            assert!(!spec.fields.is_empty(), "{kind:?} has no fields");
            assert!(spec.endpoint.starts_with("/api/"), "{kind:?} endpoint");
            assert_eq!(spec.method, "POST");
        }
    }

    #[test]
    fn derived_columns_never_appear_in_forms() {
        for kind in ModalKind::ALL {
            for field in kind.spec().fields {
                assert!(
                    !matches!(field.name, "Age" | "Episode_Count" | "Status"),
                    "{kind:?} exposes derived column {}",
                    field.name
                );
            }
        }
    }

    #[test]
    fn procedure_fields_follow_positional_argument_order() {
        let names: Vec<_> = ModalKind::NewCustomerSubscription
            .spec()
            .fields
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "customer_id",
                "first_name",
                "phone_no",
                "city",
                "date_of_birth",
                "package_id",
                "subscription_id"
            ]
        );

        let names: Vec<_> = ModalKind::RecordNewPayment
            .spec()
            .fields
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["billing_id", "customer_id", "amount", "discount"]);
    }

    #[test]
    fn procedure_tags_are_exactly_three() {
        let procedures: Vec<_> = ModalKind::ALL
            .iter()
            .filter(|k| k.is_procedure())
            .collect();
        assert_eq!(procedures.len(), 3);
    }
}
