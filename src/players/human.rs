use super::event::Event;
use super::player::Player;
use crate::betting::Action;
use crate::betting::Turn;
use dialoguer::Select;

/// Interactive seat driven from the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn decide(&mut self, legal: &[Action]) -> anyhow::Result<Action> {
        let choices = legal.iter().map(|a| a.to_string()).collect::<Vec<_>>();
        let selection = Select::new()
            .with_prompt("YOUR MOVE")
            .report(false)
            .items(&choices)
            .default(legal.iter().position(|a| *a == Action::Call).unwrap_or(0))
            .interact()?;
        Ok(legal[selection])
    }

    fn notify(&mut self, event: &Event) -> anyhow::Result<()> {
        match event {
            Event::Round { hole, .. } => println!("\nYOU HOLD {}", hole),
            Event::Street { street, board } => println!("{:<8} {}", street, board),
            Event::Act { actor: Turn::Villain, action, bet } => {
                println!("OPPONENT {} ({} in)", action, bet)
            }
            Event::Result { winner, stacks } => match winner {
                Some(Turn::Hero) => println!("YOU WIN    stack {}", stacks.0),
                Some(Turn::Villain) => println!("YOU LOSE   stack {}", stacks.0),
                None => println!("SPLIT POT  stack {}", stacks.0),
            },
            _ => {}
        }
        Ok(())
    }
}
