use chained_prompts::{validate, Input, Prompter, Terminal};

#[tokio::main]
async fn main() -> chained_prompts::Result<()> {
    env_logger::init();

    let mut prompter = Prompter::new(Terminal);

    let first_name = prompter
        .input(Input::new("What is your first name?").with_validator(validate::required("Please tell me!")))
        .await?;

    let last_name = prompter.input(Input::new("What is your last name?")).await?;

    let from = prompter
        .input(Input::new("Where are you from?").with_default("The north"))
        .await?;

    if prompter.confirm("Show the details?", true).await? {
        println!("You are {} {} from {}!", first_name, last_name, from);
    }
    Ok(())
}
