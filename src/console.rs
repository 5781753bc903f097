//! Terminal collaborators: prompts on stdin, transcript on stdout.

use std::io::{self, BufRead, Write};

use circle_dice::core::{GameConfig, GameError, Player, PlayerId, Result};
use circle_dice::decision::{ChoiceRequest, DecisionSource, GameObserver};
use circle_dice::game::{GameResult, Standings};
use circle_dice::rules::{RoundOutcome, Transfer};

/// Reads answers line by line, asking again on anything that is not a number.
pub struct ConsoleDecisions<I, O> {
    input: I,
    output: O,
}

impl ConsoleDecisions<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> ConsoleDecisions<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Read one line. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line)),
            Err(err) => Err(GameError::InputUnavailable(err.to_string())),
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|err| GameError::InputUnavailable(err.to_string()))
    }
}

fn prompt(request: &ChoiceRequest) -> String {
    match request {
        ChoiceRequest::PlayerCount => "Enter number of players: ".to_string(),
        ChoiceRequest::DicePerPlayer => "Enter number of dice: ".to_string(),
        ChoiceRequest::TransferTarget {
            source,
            dice,
            previous,
            next,
        } => format!(
            "{source} has {dice} dice with 1, who do you want to give it to (player {} or player {})? ",
            previous.number(),
            next.number()
        ),
    }
}

impl<I: BufRead, O: Write> DecisionSource for ConsoleDecisions<I, O> {
    fn request_choice(&mut self, request: &ChoiceRequest) -> Result<i64> {
        loop {
            self.write(&prompt(request))?;
            let Some(line) = self.read_line()? else {
                return Err(GameError::InputUnavailable("end of input".into()));
            };

            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(input = line.trim(), %err, "unreadable answer");
                    self.write("Please enter a number\n")?;
                }
            }
        }
    }

    fn confirm_roll(&mut self, _round: u32) -> Result<()> {
        self.write("Press enter to roll dice...")?;
        // A closed stdin only matters once a real choice is needed
        self.read_line()?;
        Ok(())
    }
}

/// Answers configuration requests from command line values first.
pub struct PresetCounts<D> {
    pub players: Option<usize>,
    pub dice: Option<usize>,
    pub fallback: D,
}

impl<D: DecisionSource> DecisionSource for PresetCounts<D> {
    fn request_choice(&mut self, request: &ChoiceRequest) -> Result<i64> {
        let preset = match request {
            ChoiceRequest::PlayerCount => self.players,
            ChoiceRequest::DicePerPlayer => self.dice,
            ChoiceRequest::TransferTarget { .. } => None,
        };

        match preset {
            Some(count) => Ok(i64::try_from(count).unwrap_or(i64::MAX)),
            None => self.fallback.request_choice(request),
        }
    }
}

/// Prints the game transcript to stdout.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn on_game_start(&mut self, config: &GameConfig) {
        println!(
            "\nPlayers: {}, Dice for each player: {}",
            config.player_count, config.dice_per_player
        );
        if let Some(seed) = config.seed {
            println!("Seed: {seed}");
        }
        println!("==== Game Start ====");
    }

    fn on_round_start(&mut self, round: u32) {
        println!("===== Round {round} =====");
    }

    fn on_roll(&mut self, player: PlayerId, state: &Player) {
        println!("{player} ({}) : {:?}", state.score(), state.dice());
    }

    fn on_choice_rejected(&mut self, _error: &GameError) {
        println!("Invalid player number");
    }

    fn on_transfer(&mut self, transfer: &Transfer) {
        println!(
            "{} gives {} dice with number 1 to player {}",
            transfer.from,
            transfer.dice,
            transfer.to.number()
        );
    }

    fn on_round_end(&mut self, _outcome: &RoundOutcome) {
        println!("=====================");
    }

    fn on_game_end(&mut self, standings: &Standings) {
        println!("==== Game End ====\n");
        for entry in standings.entries() {
            println!("{} score : {}", entry.player, entry.score);
        }

        println!("\n==== Winner ====");
        match standings.result() {
            GameResult::Winner(player) => {
                println!("{player} wins with score {}", standings.top_score());
            }
            GameResult::SharedVictory(players) => {
                let numbers: Vec<i64> = players.iter().map(|p| p.number()).collect();
                println!("Players {numbers:?} win with score {}", standings.top_score());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circle_dice::decision::ScriptedDecisions;

    fn console(input: &str) -> ConsoleDecisions<&[u8], Vec<u8>> {
        ConsoleDecisions::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let mut decisions = console("abc\n\n 4 \n");
        assert_eq!(decisions.request_choice(&ChoiceRequest::PlayerCount), Ok(4));

        let transcript = String::from_utf8(decisions.output).unwrap();
        assert_eq!(transcript.matches("Enter number of players: ").count(), 3);
    }

    #[test]
    fn test_end_of_input() {
        let mut decisions = console("");
        assert!(matches!(
            decisions.request_choice(&ChoiceRequest::DicePerPlayer),
            Err(GameError::InputUnavailable(_))
        ));
        assert!(decisions.confirm_roll(1).is_ok());
    }

    #[test]
    fn test_transfer_prompt_is_one_based() {
        let request = ChoiceRequest::TransferTarget {
            source: PlayerId::new(1),
            dice: 2,
            previous: PlayerId::new(0),
            next: PlayerId::new(2),
        };
        assert_eq!(
            prompt(&request),
            "Player 2 has 2 dice with 1, who do you want to give it to (player 1 or player 3)? "
        );
    }

    #[test]
    fn test_preset_counts() {
        let mut decisions = PresetCounts {
            players: Some(3),
            dice: None,
            fallback: ScriptedDecisions::new([5]),
        };

        let config = GameConfig::request(&mut decisions).unwrap();
        assert_eq!(config, GameConfig::new(3, 5));
        assert_eq!(decisions.fallback.requests(), &[ChoiceRequest::DicePerPlayer]);
    }
}
