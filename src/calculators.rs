use crate::models::{ChartData, ChartSlice, ResultLine, ResultValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Float,
    Integer,
    Text,
}

#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: &'static str,
    /// `(value, label)` pairs; non-empty means the field renders as a select.
    pub options: &'static [(&'static str, &'static str)],
}

impl FieldSpec {
    const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Float,
            required: true,
            default: "",
            options: &[],
        }
    }

    const fn integer(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Integer,
            ..Self::number(name, label)
        }
    }

    const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }
}

/// A calculator page: its form, the upstream endpoint it posts to, and how
/// the response maps onto display lines and chart series.
pub struct Calculator {
    pub slug: &'static str,
    pub title: &'static str,
    pub endpoint: &'static str,
    pub fields: &'static [FieldSpec],
    pub result_fields: &'static [&'static str],
    pub summarize: fn(&ResultValues) -> Vec<ResultLine>,
    pub chart: fn(&ResultValues) -> ChartData,
}

impl Calculator {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("slug", &self.slug)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

pub static MORTGAGE: Calculator = Calculator {
    slug: "mortgage",
    title: "Mortgage Calculator",
    endpoint: "/api/mortgage",
    fields: &[
        FieldSpec::number("homePrice", "Home Price"),
        FieldSpec::number("downPayment", "Down Payment"),
        FieldSpec::number("interest", "Interest Rate (%)"),
        FieldSpec::number("years", "Loan Term (Years)"),
        FieldSpec::number("taxRate", "Property Tax Rate (%)"),
        FieldSpec::number("insurance", "Annual Home Insurance"),
        FieldSpec::number("hoa", "Monthly HOA Fees"),
    ],
    result_fields: &["loanPayment", "tax", "insurance", "hoa"],
    summarize: mortgage_lines,
    chart: mortgage_chart,
};

pub static INCOME_TAX: Calculator = Calculator {
    slug: "income-tax",
    title: "Income Tax Calculator",
    endpoint: "/api/income-tax",
    fields: &[
        FieldSpec {
            name: "filingStatus",
            label: "Filing Status",
            kind: FieldKind::Text,
            required: false,
            default: "single",
            options: &[("single", "Single"), ("married", "Married Filing Jointly")],
        },
        FieldSpec::number("income", "Base Salary ($)"),
        FieldSpec::number("otherIncome", "Other Income ($)").optional(),
        FieldSpec::number("deductions", "Deductions ($)").optional(),
        FieldSpec::number("taxCredits", "Tax Credits ($)").optional(),
    ],
    result_fields: &["grossIncome", "taxableIncome", "totalTax", "effectiveRate"],
    summarize: income_tax_lines,
    chart: income_tax_chart,
};

pub static RETIREMENT: Calculator = Calculator {
    slug: "retirement",
    title: "401(k) Retirement Calculator",
    endpoint: "/api/401k",
    fields: &[
        FieldSpec::number("currentBalance", "Current Balance ($)"),
        FieldSpec::number("contribution", "Monthly Contribution ($)"),
        FieldSpec::integer("years", "Years to Retirement"),
        FieldSpec::number("returnRate", "Annual Return Rate (%)"),
        FieldSpec::number("salary", "Annual Salary ($)"),
        FieldSpec::number("matchPercent", "Employer Match (%)"),
        FieldSpec::number("maxMatchPercent", "Employer Max Match (% of salary)"),
    ],
    result_fields: &["futureValue", "fromContributions", "fromCurrentBalance"],
    summarize: retirement_lines,
    chart: retirement_chart,
};

pub static ALL: [&Calculator; 3] = [&MORTGAGE, &INCOME_TAX, &RETIREMENT];

pub fn find(slug: &str) -> Option<&'static Calculator> {
    ALL.iter().copied().find(|calc| calc.slug == slug)
}

const BLUE: &str = "#3b82f6";
const GREEN: &str = "#10b981";
const YELLOW: &str = "#facc15";
const ORANGE: &str = "#f97316";
const RED: &str = "#ef4444";

fn mortgage_parts(values: &ResultValues) -> [(&'static str, f64); 4] {
    [
        ("Loan Payment", values.get("loanPayment")),
        ("Property Tax", values.get("tax")),
        ("Insurance", values.get("insurance")),
        ("HOA Fees", values.get("hoa")),
    ]
}

fn mortgage_lines(values: &ResultValues) -> Vec<ResultLine> {
    let parts = mortgage_parts(values);
    let total: f64 = parts.iter().map(|(_, value)| value).sum();
    let mut lines: Vec<ResultLine> = parts
        .iter()
        .map(|&(label, value)| ResultLine::currency(label, value).with_share(value, total))
        .collect();
    lines.push(ResultLine::currency("Total", total));
    lines
}

fn mortgage_chart(values: &ResultValues) -> ChartData {
    let [loan, tax, insurance, hoa] = mortgage_parts(values).map(|(_, value)| value);
    ChartData {
        title: "Monthly Breakdown ($)",
        slices: vec![
            ChartSlice { label: "Loan", value: loan, color: BLUE },
            ChartSlice { label: "Tax", value: tax, color: GREEN },
            ChartSlice { label: "Insurance", value: insurance, color: YELLOW },
            ChartSlice { label: "HOA", value: hoa, color: ORANGE },
        ],
    }
}

fn income_tax_lines(values: &ResultValues) -> Vec<ResultLine> {
    vec![
        ResultLine::currency("Gross Income", values.get("grossIncome")),
        ResultLine::currency("Taxable Income", values.get("taxableIncome")),
        ResultLine::currency("Total Tax", values.get("totalTax")),
        ResultLine::percent("Effective Tax Rate", values.get("effectiveRate")),
    ]
}

fn income_tax_chart(values: &ResultValues) -> ChartData {
    let tax = values.get("totalTax");
    let gross = values.get("grossIncome");
    ChartData {
        title: "Income Distribution ($)",
        slices: vec![
            ChartSlice { label: "Tax", value: tax, color: RED },
            ChartSlice { label: "After-Tax Income", value: gross - tax, color: GREEN },
        ],
    }
}

fn retirement_lines(values: &ResultValues) -> Vec<ResultLine> {
    vec![
        ResultLine::currency("Total Projected Savings", values.get("futureValue")),
        ResultLine::currency(
            "From Contributions + Employer Match",
            values.get("fromContributions"),
        ),
        ResultLine::currency("From Current Balance Growth", values.get("fromCurrentBalance")),
    ]
}

fn retirement_chart(values: &ResultValues) -> ChartData {
    ChartData {
        title: "401(k) Components ($)",
        slices: vec![
            ChartSlice {
                label: "Contributions + Match",
                value: values.get("fromContributions"),
                color: BLUE,
            },
            ChartSlice {
                label: "Growth from Current Balance",
                value: values.get("fromCurrentBalance"),
                color: GREEN,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(calc: &Calculator, body: serde_json::Value) -> ResultValues {
        ResultValues::from_json(calc.result_fields, body.as_object().unwrap())
    }

    #[test]
    fn find_resolves_every_slug() {
        for calc in ALL {
            assert_eq!(find(calc.slug).map(|found| found.endpoint), Some(calc.endpoint));
        }
        assert!(find("pension").is_none());
    }

    #[test]
    fn only_income_is_required_for_income_tax() {
        let required: Vec<_> = INCOME_TAX
            .fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name)
            .collect();
        assert_eq!(required, vec!["income"]);
        assert!(MORTGAGE.fields.iter().all(|field| field.required));
        assert!(RETIREMENT.fields.iter().all(|field| field.required));
    }

    #[test]
    fn retirement_years_is_the_only_integer_field() {
        let integers: Vec<_> = ALL
            .iter()
            .flat_map(|calc| calc.fields.iter())
            .filter(|field| field.kind == FieldKind::Integer)
            .map(|field| field.name)
            .collect();
        assert_eq!(integers, vec!["years"]);
        assert_eq!(RETIREMENT.field("years").unwrap().kind, FieldKind::Integer);
        assert_eq!(MORTGAGE.field("years").unwrap().kind, FieldKind::Float);
    }

    #[test]
    fn mortgage_lines_include_shares_and_total() {
        let values = values(
            &MORTGAGE,
            json!({ "loanPayment": 1500.0, "tax": 300.0, "insurance": 150.0, "hoa": 50.0 }),
        );
        let lines = (MORTGAGE.summarize)(&values);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].value, "$1500.00");
        assert_eq!(lines[0].share.as_deref(), Some("75.0%"));
        assert_eq!(lines[3].share.as_deref(), Some("2.5%"));
        assert_eq!(lines[4].label, "Total");
        assert_eq!(lines[4].value, "$2000.00");
        assert!(lines[4].share.is_none());
    }

    #[test]
    fn income_tax_chart_splits_gross_into_tax_and_remainder() {
        let values = values(
            &INCOME_TAX,
            json!({ "grossIncome": 80000.0, "taxableIncome": 66150.0, "totalTax": 9500.0, "effectiveRate": 11.876 }),
        );
        let chart = (INCOME_TAX.chart)(&values);
        let series: Vec<_> = chart.slices.iter().map(|slice| slice.value).collect();
        assert_eq!(series, vec![9500.0, 70500.0]);

        let lines = (INCOME_TAX.summarize)(&values);
        assert_eq!(lines[3].value, "11.88%");
    }

    #[test]
    fn partial_retirement_response_renders_zeros() {
        let values = values(&RETIREMENT, json!({ "futureValue": 250000.0 }));
        let lines = (RETIREMENT.summarize)(&values);
        assert_eq!(lines[0].value, "$250000.00");
        assert_eq!(lines[1].value, "$0.00");
        assert_eq!(lines[2].value, "$0.00");
    }
}
