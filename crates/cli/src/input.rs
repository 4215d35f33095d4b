#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pull(u32),
    GuaranteedLegendary,
    GuaranteedRare,
    ResetPity,
    SetPity(i64),
    ClearHistory,
    ToggleType(String),
    ToggleMastery(String),
    ToggleAllTypes,
    ToggleAllMastery,
    Status,
    History,
    Reveal(Option<usize>),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub const MAX_PULL_COUNT: u32 = 1_000;

pub const HELP_TEXT: &str = "\
commands:
  pull [n]          draw n times (default 1)
  legendary | rare  guaranteed pull, no pity and no save
  reset             reset both pity counters
  setpity <n>       set legendary pity (0..=threshold)
  clear             clear the result history
  type <name>       toggle a type on or off
  mastery <name>    toggle mastery of an active type
  all-types         toggle every type
  all-mastery       toggle mastery of every active type
  status            pity counters and types
  history           previous results
  reveal [i|all]    uncover one card or all of them
  help | quit";

pub fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Command::Empty;
    };
    let rest: Vec<&str> = parts.collect();
    let arg = rest.join(" ");
    match head.to_ascii_lowercase().as_str() {
        "pull" | "p" => {
            if arg.is_empty() {
                return Command::Pull(1);
            }
            match arg.parse::<u32>() {
                Ok(count) if (1..=MAX_PULL_COUNT).contains(&count) => Command::Pull(count),
                _ => Command::Invalid(format!(
                    "pull count must be between 1 and {MAX_PULL_COUNT}, got {arg}"
                )),
            }
        }
        "legendary" => Command::GuaranteedLegendary,
        "rare" => Command::GuaranteedRare,
        "reset" => Command::ResetPity,
        "setpity" => match arg.parse::<i64>() {
            Ok(value) => Command::SetPity(value),
            Err(_) => Command::Invalid(format!("setpity needs a number, got {arg:?}")),
        },
        "clear" => Command::ClearHistory,
        "type" if !arg.is_empty() => Command::ToggleType(arg),
        "mastery" if !arg.is_empty() => Command::ToggleMastery(arg),
        "type" | "mastery" => Command::Invalid(format!("{head} needs a type name")),
        "all-types" => Command::ToggleAllTypes,
        "all-mastery" => Command::ToggleAllMastery,
        "status" | "s" => Command::Status,
        "history" | "h" => Command::History,
        "reveal" | "r" => match arg.as_str() {
            "" | "all" => Command::Reveal(None),
            value => match value.parse::<usize>() {
                Ok(index) => Command::Reveal(Some(index)),
                Err(_) => Command::Invalid(format!("reveal takes an index or 'all', got {value}")),
            },
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command: {other}")),
    }
}
