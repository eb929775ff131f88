use std::io::{self, BufRead, Write};

use account_form::{
    Field, FieldKind, FieldValue, Food, FormController, FormError, Language, SimulatedSubmitter,
    Submitter,
};

const HELP: &str = "\
Commands:
  <field>=<value>   set a field (username, favLanguage, favFood, agreement)
  show              print the form
  submit            create the account
  quit              leave";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    femme::start();

    let submitter: Box<dyn Submitter> = Box::new(SimulatedSubmitter::new());
    let mut form = FormController::new(submitter);

    println!("=== Create an Account ===");
    println!("{HELP}\n");
    render(&form);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" => break,
            "show" => render(&form),
            "help" => println!("{HELP}"),
            "submit" => {
                if !form.can_submit() {
                    println!("Fix the errors above before submitting.");
                    continue;
                }
                println!("Submitting...");
                match form.submit().await {
                    Ok(welcome) => println!("{welcome}"),
                    Err(err) => println!("{err}"),
                }
                render(&form);
            }
            input => match input.split_once('=') {
                Some((name, value)) => match apply(&mut form, name.trim(), value.trim()) {
                    Ok(()) => render(&form),
                    Err(err) => println!("{err}"),
                },
                None => println!("Unknown command '{input}'. Type 'help'."),
            },
        }
    }

    Ok(())
}

fn apply<S: Submitter>(
    form: &mut FormController<S>,
    name: &str,
    value: &str,
) -> Result<(), FormError> {
    let field: Field = name.parse()?;
    let value = match field.kind() {
        FieldKind::Checkbox => FieldValue::Checked(matches!(value, "true" | "yes" | "on" | "1")),
        FieldKind::Text => FieldValue::Text(value.to_string()),
    };
    form.on_field_change(field, value)
}

fn render<S: Submitter>(form: &FormController<S>) {
    let snapshot = form.snapshot();
    let state = &snapshot.state;

    let languages: Vec<_> = Language::ALL.iter().map(|l| l.as_str()).collect();
    let foods: Vec<_> = Food::ALL.iter().map(|f| f.as_str()).collect();

    println!();
    for field in Field::ALL {
        let value = match state.get(field) {
            FieldValue::Text(text) => format!("{text:?}"),
            FieldValue::Checked(checked) => (if checked { "[x]" } else { "[ ]" }).to_string(),
        };
        let hint = match field {
            Field::FavLanguage => format!(" ({})", languages.join(" | ")),
            Field::FavFood => format!(" ({})", foods.join(" | ")),
            _ => String::new(),
        };
        println!("  {field:<12} {value}{hint}");
        if let Some(error) = snapshot.errors.get(field) {
            println!("  {:<12} ! {error}", "");
        }
    }

    let button = if snapshot.can_submit { "[Submit]" } else { "[Submit] (disabled)" };
    println!("  {button}\n");
    log::debug!("Rendered form with status {}", snapshot.status);
}
