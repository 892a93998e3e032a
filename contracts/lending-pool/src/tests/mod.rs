#![cfg(test)]


mod test_loans;
