pub struct Parser {
    flags: Vec<Flag>,
    accept_flag_option: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            flags: vec![],
            accept_flag_option: false,
        }
    }

    pub fn parse_from_vec(&mut self, source: &[impl AsRef<str>]) -> Vec<Flag> {
        for item in source {
            let should_break = self.find_word_variant(item.as_ref());
            if should_break {
                break;
            }
        }
        self.accept_flag_option = false;
        std::mem::take(&mut self.flags)
    }

    /// Check word variant
    ///
    /// * - Return : If loop should break
    fn find_word_variant(&mut self, word: &str) -> bool {
        // Option of a previous flag
        if self.accept_flag_option {
            if let Some(flag) = self.flags.last_mut() {
                flag.option = word.to_string();
            }
            self.accept_flag_option = false;
            return false;
        }

        if !word.starts_with('-') {
            self.flags.push(Flag::argument(word));
            return false;
        }

        let flag = Self::match_word(word);

        if flag.early_exit {
            self.flags = vec![flag];
            return true;
        }

        if flag.need_option {
            self.accept_flag_option = true;
        }

        self.flags.push(flag);
        false
    }

    fn match_word(word: &str) -> Flag {
        match word.trim() {
            "--version" | "-v" => Flag::new(FlagType::Version, false, true),
            "--help" | "-h" => Flag::new(FlagType::Help, false, true),
            "--command" | "-c" => Flag::new(FlagType::Command, true, false),
            "--out" | "-o" => Flag::new(FlagType::Out, true, false),
            "--no-log" => Flag::new(FlagType::NoLog, false, false),
            _ => {
                let mut flag = Flag::new(FlagType::None, false, false);
                flag.option = word.to_string();
                flag
            }
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Flag {
    pub ftype: FlagType,
    pub need_option: bool,
    pub option: String,
    pub early_exit: bool,
}

impl Flag {
    fn new(ftype: FlagType, need_option: bool, early_exit: bool) -> Self {
        Self {
            ftype,
            need_option,
            option: String::new(),
            early_exit,
        }
    }

    pub fn argument(arg: &str) -> Self {
        let mut flag = Self::new(FlagType::Argument, false, false);
        flag.option = arg.to_string();
        flag
    }
}

#[derive(PartialEq, Debug)]
pub enum FlagType {
    Argument,
    Command,
    Help,
    NoLog,
    Out,
    Version,
    None,
}
