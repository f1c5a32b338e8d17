use crate::calculators::Calculator;

/// Raw field values exactly as typed, in the calculator's declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<(&'static str, String)>,
}

impl FormState {
    pub fn for_calculator(calc: &Calculator) -> Self {
        let fields = calc
            .fields
            .iter()
            .map(|field| (field.name, field.default.to_string()))
            .collect();
        Self { fields }
    }

    /// Replaces one field's value untouched. Returns `false` for names the
    /// form does not declare.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Labels of required fields left empty.
    pub fn missing_required(&self, calc: &Calculator) -> Vec<&'static str> {
        calc.fields
            .iter()
            .filter(|field| field.required)
            .filter(|field| self.get(field.name).is_none_or(str::is_empty))
            .map(|field| field.label)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{INCOME_TAX, MORTGAGE};

    #[test]
    fn defaults_to_empty_except_declared_defaults() {
        let form = FormState::for_calculator(&INCOME_TAX);
        assert_eq!(form.get("income"), Some(""));
        assert_eq!(form.get("filingStatus"), Some("single"));
        let names: Vec<_> = form.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["filingStatus", "income", "otherIncome", "deductions", "taxCredits"]
        );
    }

    #[test]
    fn set_replaces_one_field_without_trimming() {
        let mut form = FormState::for_calculator(&MORTGAGE);
        assert!(form.set("homePrice", "  350000 "));
        assert_eq!(form.get("homePrice"), Some("  350000 "));
        assert_eq!(form.get("downPayment"), Some(""));
        assert!(!form.set("unknown", "1"));
        assert_eq!(form.get("unknown"), None);
    }

    #[test]
    fn missing_required_lists_empty_required_labels() {
        let mut form = FormState::for_calculator(&INCOME_TAX);
        assert_eq!(form.missing_required(&INCOME_TAX), vec!["Base Salary ($)"]);
        form.set("income", "52000");
        assert!(form.missing_required(&INCOME_TAX).is_empty());

        let form = FormState::for_calculator(&MORTGAGE);
        assert_eq!(form.missing_required(&MORTGAGE).len(), MORTGAGE.fields.len());
    }
}
