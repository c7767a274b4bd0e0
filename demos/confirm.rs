use chained_prompts::PromptError;

#[tokio::main]
async fn main() {
    env_logger::init();

    // Ask the question, enter answers yes
    match chained_prompts::confirm("Are you sure?", true).await {
        Ok(true) => println!("You were sure!"),
        Ok(false) => println!("You were not sure!"),
        Err(PromptError::Aborted) => println!("Prompt was aborted!"),
        Err(e) => println!("Prompt failed: {}", e),
    }
}
