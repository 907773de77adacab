//! Conversations with NPCs: numbered options, effects and follow-ups.

use tracing::{debug, info};
use wc_core::DialogueOption;

use crate::error::{EngineError, EngineResult};
use crate::narration::Severity;
use crate::parser::Command;
use crate::session::GameSession;

/// An open conversation and the options currently offered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Conversation {
    pub npc: String,
    pub options: Vec<DialogueOption>,
}

impl GameSession {
    /// Greet an NPC, offer its quest and open its options.
    pub(crate) fn talk(&mut self, name: Option<&str>) -> EngineResult<()> {
        let name = name.ok_or(EngineError::MissingArgument("Talk to whom?"))?;
        let Some(npc) = self.current()?.find_npc(name).cloned() else {
            return Err(self.not_here(name));
        };

        self.say(Severity::Normal, format!("You talk to {}.", npc.name));
        self.say(Severity::Highlight, format!("\"{}\"", npc.greeting));
        if self.player.record_talk(&npc.name) {
            debug!(npc = %npc.name, "first conversation");
        }
        if let Some(quest) = &npc.quest {
            self.offer_quest(quest);
        }
        if npc.options.is_empty() {
            return Ok(());
        }

        info!(npc = %npc.name, "dialogue opened");
        self.dialogue = Some(Conversation {
            npc: npc.name,
            options: npc.options,
        });
        self.show_options();
        Ok(())
    }

    /// Input while a conversation is open. Anything that is not a choice or
    /// a goodbye closes the conversation and runs as a normal command.
    pub(crate) fn dispatch_dialogue(&mut self, command: Command) -> EngineResult<()> {
        match command {
            Command::EndConversation => {
                self.end_conversation();
                Ok(())
            }
            Command::Choose(n) => self.choose(n),
            other => {
                if let Some(conversation) = self.dialogue.take() {
                    debug!(npc = %conversation.npc, "dialogue closed by other command");
                    self.say(
                        Severity::Info,
                        format!("You leave the conversation with {}.", conversation.npc),
                    );
                }
                self.dispatch(other)
            }
        }
    }

    /// Pick the `n`th offered option (1-based).
    fn choose(&mut self, n: usize) -> EngineResult<()> {
        let Some(conversation) = &self.dialogue else {
            return Err(EngineError::NotInConversation);
        };
        let option = n
            .checked_sub(1)
            .and_then(|i| conversation.options.get(i))
            .cloned()
            .ok_or(EngineError::InvalidChoice(n))?;
        let npc = conversation.npc.clone();

        self.say(Severity::Normal, format!("> {}", option.prompt));
        self.say(Severity::Highlight, format!("{npc}: \"{}\"", option.response));
        if let Some(effect) = &option.effect {
            self.apply_effect(effect);
        }
        if !option.follow_ups.is_empty() {
            if let Some(conversation) = self.dialogue.as_mut() {
                conversation.options = option.follow_ups;
            }
        }
        self.show_options();
        Ok(())
    }

    fn end_conversation(&mut self) {
        if let Some(conversation) = self.dialogue.take() {
            info!(npc = %conversation.npc, "dialogue closed");
            self.say(
                Severity::Info,
                format!("You end the conversation with {}.", conversation.npc),
            );
        }
    }

    fn show_options(&mut self) {
        let Some(conversation) = &self.dialogue else {
            return;
        };
        let lines: Vec<String> = conversation
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("{}. {}", i + 1, o.prompt))
            .collect();
        for line in lines {
            self.say(Severity::Info, line);
        }
        self.say(
            Severity::Info,
            "Type a number to choose, or \"bye\" to end the conversation.",
        );
    }
}
