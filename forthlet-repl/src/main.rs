use forthlet_core::errors::*;
use forthlet_core::State;
use rustyline::Editor;

fn main() {
    let mut state = State::new();
    let mut rl = Editor::<()>::new();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str());

                // `words` on its own line is a repl command, not input to
                // the interpreter (the language has no I/O words)
                if line.trim() == "words" {
                    print_dictionary(&state);
                    continue;
                }

                match state.evaluate(&line) {
                    Ok(next) => {
                        state = next;
                        print_stack(&state);
                    }
                    Err(e) => report_error(e),
                }
            }
            _ => {
                println!("bye");
                break;
            }
        }
    }
}

fn print_stack(state: &State) {
    match state.format_stack() {
        Ok(rendering) => println!("[{}]", rendering),
        Err(e) => report_error(e),
    }
}

fn print_dictionary(state: &State) {
    for name in state.words() {
        match state.lookup(&name) {
            Some(entry) => println!("{:>12}   {}", name, entry),
            None => println!("{:>12}   undefined!", name),
        }
    }
}

fn report_error(e: Error) {
    eprintln!("{}", e)
}
