use chained_prompts::{validate::{self, ValidationResult}, Validation, ValidatorChain};

#[tokio::main]
async fn main() {
    env_logger::init();

    // Passwords between 8 and 20 characters (inclusive) that are not on the list
    let validators = ValidatorChain::new()
        .with(validate::required("You must type something!"))
        .with(validate::min_len(8, "You must type at least 8 characters!"))
        .with(validate::max_len(20, "You must not type more than 20 characters!"))
        .with(|input: String| async move {
            // Stands in for an async lookup, e.g. a breached password service
            if ["password", "12345678", "qwertyui"].contains(&input.as_str()) {
                ValidationResult::Ok(Validation::Invalid("That one is far too common!".to_string()))
            } else {
                Ok(Validation::Valid)
            }
        });

    // Run the prompt and echo the password
    match chained_prompts::password("What is your password?", validators).await {
        Ok(s) => println!("You wrote: {}", s),
        Err(e) => println!("No password: {}", e),
    }
}
