/// Rupee amount with two decimals, as shown in every price cell.
pub fn money(value: f64) -> String {
    format!("₹{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimal_rupees() {
        assert_eq!(money(500.0), "₹500.00");
        assert_eq!(money(840.5), "₹840.50");
        assert_eq!(money(0.0), "₹0.00");
    }
}
