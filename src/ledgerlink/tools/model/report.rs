use serde::{Deserialize, Serialize};

/// A financial report as the service sends it.
///
/// The layout is visual rather than structured: rows nest arbitrarily and the
/// cells carry numbers as strings next to labels. Use
/// [`Report::formatted_report`] to get a simpler tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "Header", default, deserialize_with = "super::null_as_default")]
    pub header: ReportHeader,
    #[serde(rename = "Columns", default, deserialize_with = "super::null_as_default")]
    pub columns: Columns,
    #[serde(rename = "Rows", default, deserialize_with = "super::null_as_default")]
    pub rows: Rows,
}

/// Free-form metadata describing a report run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReportHeader {
    #[serde(deserialize_with = "super::null_as_default")]
    pub time: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub report_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub report_basis: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub start_period: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub end_period: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub customer: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub option: Vec<NameValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    #[serde(rename = "Column", default, deserialize_with = "super::null_as_default")]
    pub column: Vec<Column>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Column {
    #[serde(deserialize_with = "super::null_as_default")]
    pub col_title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub col_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub meta_data: Vec<NameValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NameValue {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rows {
    #[serde(rename = "Row", default, deserialize_with = "super::null_as_default")]
    pub row: Vec<Row>,
}

/// One line of a report, possibly grouping nested lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "Header", default, deserialize_with = "super::null_as_default")]
    pub header: CellGroup,
    #[serde(rename = "Rows", default, deserialize_with = "super::null_as_default")]
    pub rows: Rows,
    #[serde(rename = "Summary", default, deserialize_with = "super::null_as_default")]
    pub summary: CellGroup,
    /// Opaque classification, e.g. `Section` or `Data`.
    #[serde(rename = "type", default, deserialize_with = "super::null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub group: String,
}

impl Row {
    /// Creates a row whose summary holds the given cell values.
    pub fn with_summary<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            summary: CellGroup::from_values(values),
            ..Self::default()
        }
    }

    /// Appends a nested row.
    pub fn push_child(&mut self, child: Row) {
        self.rows.row.push(child);
    }

    pub fn children(&self) -> &[Row] {
        &self.rows.row
    }

    pub fn is_leaf(&self) -> bool {
        self.rows.row.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellGroup {
    #[serde(rename = "ColData", default, deserialize_with = "super::null_as_default")]
    pub col_data: Vec<Cell>,
}

impl CellGroup {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            col_data: values
                .into_iter()
                .map(|value| Cell {
                    value: value.into(),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.col_data.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub value: String,
}

/// Reports the client knows how to request, with their fixed parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    CustomerSales,
    CashFlow,
    ProfitAndLoss,
    ProfitAndLossDetail,
    TransactionList,
    CustomerIncome,
    AccountList,
}

impl ReportKind {
    /// Resource name used in the report URL.
    pub fn url_name(self) -> &'static str {
        match self {
            ReportKind::CustomerSales => "CustomerSales",
            ReportKind::CashFlow => "CashFlow",
            ReportKind::ProfitAndLoss => "ProfitAndLoss",
            ReportKind::ProfitAndLossDetail => "ProfitAndLossDetail",
            ReportKind::TransactionList => "TransactionList",
            ReportKind::CustomerIncome => "CustomerIncome",
            ReportKind::AccountList => "AccountList",
        }
    }

    /// Extra query parameters always sent for this report.
    pub fn fixed_params(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ReportKind::TransactionList | ReportKind::CustomerIncome => {
                &[("group_by", "Transaction Type")]
            }
            _ => &[],
        }
    }
}
