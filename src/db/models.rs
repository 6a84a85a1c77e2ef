use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Row types mirror the external schema's column names exactly, including
// their inconsistent casing (`Customer_ID` vs `Employee_Id`). The engine owns
// the schema; the gateway only moves its rows.

/// A subscriber. `Age` is populated by the engine's before-insert trigger
/// from `Date_of_Birth` and is never written by this system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    #[serde(rename = "Customer_ID")]
    #[sqlx(rename = "Customer_ID")]
    pub customer_id: String,
    #[serde(rename = "First_Name")]
    #[sqlx(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    #[sqlx(rename = "Last_Name")]
    pub last_name: Option<String>,
    #[serde(rename = "Phone_No")]
    #[sqlx(rename = "Phone_No")]
    pub phone_no: Option<String>,
    #[serde(rename = "City")]
    #[sqlx(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "Date_of_Birth")]
    #[sqlx(rename = "Date_of_Birth")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "Age")]
    #[sqlx(rename = "Age")]
    pub age: Option<i32>,
}

/// Insert payload for `Customer`; carries no `Age` on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    #[serde(rename = "Customer_ID")]
    pub customer_id: String,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: Option<String>,
    #[serde(rename = "Phone_No")]
    pub phone_no: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "Date_of_Birth")]
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    #[serde(rename = "Employee_Id")]
    #[sqlx(rename = "Employee_Id")]
    pub employee_id: String,
    #[serde(rename = "Name")]
    #[sqlx(rename = "Name")]
    pub name: String,
    #[serde(rename = "Contact")]
    #[sqlx(rename = "Contact")]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Package {
    #[serde(rename = "Package_Id")]
    #[sqlx(rename = "Package_Id")]
    pub package_id: String,
    #[serde(rename = "Name")]
    #[sqlx(rename = "Name")]
    pub name: String,
    #[serde(rename = "Duration")]
    #[sqlx(rename = "Duration")]
    pub duration: Option<i32>,
    #[serde(rename = "Cost")]
    #[sqlx(rename = "Cost")]
    pub cost: Option<Decimal>,
}

/// A subscription row as served by the list endpoint. `Status` is computed
/// per-row by `GetSubscriptionStatus` inside the SELECT and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    #[serde(rename = "Subscription_Id")]
    #[sqlx(rename = "Subscription_Id")]
    pub subscription_id: String,
    #[serde(rename = "Start_Date")]
    #[sqlx(rename = "Start_Date")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "End_Date")]
    #[sqlx(rename = "End_Date")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "Customer_Id")]
    #[sqlx(rename = "Customer_Id")]
    pub customer_id: String,
    #[serde(rename = "Package_Id")]
    #[sqlx(rename = "Package_Id")]
    pub package_id: String,
    #[serde(rename = "Status")]
    #[sqlx(rename = "Status")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubscription {
    #[serde(rename = "Subscription_Id")]
    pub subscription_id: String,
    #[serde(rename = "Start_Date")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "End_Date")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "Customer_Id")]
    pub customer_id: String,
    #[serde(rename = "Package_Id")]
    pub package_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Channel {
    #[serde(rename = "Channel_Id")]
    #[sqlx(rename = "Channel_Id")]
    pub channel_id: String,
    #[serde(rename = "Name")]
    #[sqlx(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    #[sqlx(rename = "Category")]
    pub category: Option<String>,
}

/// `Episode_Count` is maintained by the engine's after-insert trigger on
/// `Episode`; this system only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Show {
    #[serde(rename = "Show_Id")]
    #[sqlx(rename = "Show_Id")]
    pub show_id: String,
    #[serde(rename = "Name")]
    #[sqlx(rename = "Name")]
    pub name: String,
    #[serde(rename = "Genre")]
    #[sqlx(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Channel_Id")]
    #[sqlx(rename = "Channel_Id")]
    pub channel_id: String,
    #[serde(rename = "Episode_Count")]
    #[sqlx(rename = "Episode_Count")]
    pub episode_count: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShow {
    #[serde(rename = "Show_Id")]
    pub show_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Channel_Id")]
    pub channel_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Episode {
    #[serde(rename = "Episode_No")]
    #[sqlx(rename = "Episode_No")]
    pub episode_no: i32,
    #[serde(rename = "Show_Id")]
    #[sqlx(rename = "Show_Id")]
    pub show_id: String,
    #[serde(rename = "Title")]
    #[sqlx(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Air_Date")]
    #[sqlx(rename = "Air_Date")]
    pub air_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Billing {
    #[serde(rename = "Billing_Id")]
    #[sqlx(rename = "Billing_Id")]
    pub billing_id: String,
    #[serde(rename = "Amount")]
    #[sqlx(rename = "Amount")]
    pub amount: Option<Decimal>,
    #[serde(rename = "Date")]
    #[sqlx(rename = "Date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "Discount")]
    #[sqlx(rename = "Discount")]
    pub discount: Option<Decimal>,
    #[serde(rename = "Customer_Id")]
    #[sqlx(rename = "Customer_Id")]
    pub customer_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Installation {
    #[serde(rename = "Installation_Id")]
    #[sqlx(rename = "Installation_Id")]
    pub installation_id: String,
    #[serde(rename = "Date")]
    #[sqlx(rename = "Date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "Employee_Id")]
    #[sqlx(rename = "Employee_Id")]
    pub employee_id: String,
    #[serde(rename = "Customer_Id")]
    #[sqlx(rename = "Customer_Id")]
    pub customer_id: String,
}

/// One row of the engine's `PackageSummary` view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PackageSummary {
    #[serde(rename = "Package_Id")]
    #[sqlx(rename = "Package_Id")]
    pub package_id: String,
    #[serde(rename = "Package_Name")]
    #[sqlx(rename = "Package_Name")]
    pub package_name: String,
    #[serde(rename = "Cost")]
    #[sqlx(rename = "Cost")]
    pub cost: Option<Decimal>,
    #[serde(rename = "Total_Channels")]
    #[sqlx(rename = "Total_Channels")]
    pub total_channels: Option<i64>,
    #[serde(rename = "Cost_Per_Month")]
    #[sqlx(rename = "Cost_Per_Month")]
    pub cost_per_month: Option<Decimal>,
}
