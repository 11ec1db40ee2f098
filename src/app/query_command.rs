// spdl
// Copyright (C) 2021  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use anyhow::Result;
use spdl_app_helper::{info, App, AppSettings, Arg, ArgMatches, Command, SubCommand};
use spdl_default::{extension_writer, AnyDefaultLogic, QueryAnswer, QueryAsker, Question};
use spdl_logic::Syntax;
use std::io::Write;

pub(crate) struct QueryCommand;

const CMD_NAME: &str = "query";

const ARG_QUESTION: &str = "QUESTION";
const ARG_FORMULA: &str = "FORMULA";
const ARG_JSON: &str = "JSON";

impl QueryCommand {
    pub fn new() -> Self {
        QueryCommand
    }
}

impl<'a> Command<'a> for QueryCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Answers a question about the first theory of a dataset.")
            .setting(AppSettings::DisableVersion)
            .arg(super::arg_input())
            .arg(super::arg_output())
            .arg(super::arg_logic())
            .arg(
                Arg::with_name(ARG_QUESTION)
                    .long("question")
                    .short("q")
                    .takes_value(true)
                    .possible_values(&[
                        "has_extension",
                        "all_extensions",
                        "credulous_entail",
                        "not_credulous_entail",
                        "skeptical_entail",
                        "not_skeptical_entail",
                    ])
                    .help("sets the question to answer")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_FORMULA)
                    .long("formula")
                    .short("f")
                    .takes_value(true)
                    .help("sets the formula of an entailment question, in the syntax of the dataset"),
            )
            .arg(
                Arg::with_name(ARG_JSON)
                    .long("json")
                    .help("writes the answer or the error as a JSON object"),
            )
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let dataset = super::read_dataset(arg_matches)?;
        let logic = super::logic_override(arg_matches)?.unwrap_or_else(|| dataset.logic());
        let theory = super::first_theory(&dataset, logic)?;
        let question = super::required_value(arg_matches, ARG_QUESTION)?;
        let formula = arg_matches.value_of(ARG_FORMULA);
        info!("asking {} for theory {} in logic {}", question, theory, logic);
        let asker = QueryAsker::new(dataset.syntax());
        let mut output = super::create_output(arg_matches)?;
        if arg_matches.is_present(ARG_JSON) {
            write_envelope(&asker, &theory, question, formula, output.as_mut())
        } else {
            let answer = asker.ask(&theory, question.parse::<Question>()?, formula)?;
            write_answer(&answer, asker.syntax(), output.as_mut())
        }
    }
}

fn write_answer(answer: &QueryAnswer, syntax: Syntax, writer: &mut dyn Write) -> Result<()> {
    let writer_for_syntax = extension_writer(syntax);
    match answer {
        QueryAnswer::Count(n) => writer_for_syntax.write_extension_count(writer, *n),
        QueryAnswer::Bool(b) => writer_for_syntax.write_acceptance_status(writer, *b),
        QueryAnswer::Extensions(e) => writer_for_syntax.write_extension_set(writer, e),
    }
}

fn write_envelope(
    asker: &QueryAsker,
    theory: &AnyDefaultLogic,
    question: &str,
    formula: Option<&str>,
    writer: &mut dyn Write,
) -> Result<()> {
    let envelope = asker.ask_envelope(theory, question, formula);
    writeln!(writer, "{}", envelope.to_json_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spdl_default::{Dataset, LogicKind};

    fn theory() -> AnyDefaultLogic {
        let dataset: Dataset = r#"{"fact": ["T"], "rule": ["T : !p / q", "T : !q / p"]}"#
            .parse()
            .unwrap();
        crate::app::first_theory(&dataset, LogicKind::Classical).unwrap()
    }

    fn answer_of(question: Question, formula: Option<&str>) -> String {
        let asker = QueryAsker::new(Syntax::PlainText);
        let answer = asker.ask(&theory(), question, formula).unwrap();
        let mut out = Vec::new();
        write_answer(&answer, Syntax::PlainText, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn envelope_of(question: &str, formula: Option<&str>) -> String {
        let asker = QueryAsker::new(Syntax::PlainText);
        let mut out = Vec::new();
        write_envelope(&asker, &theory(), question, formula, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_answers() {
        assert_eq!("2\n", answer_of(Question::HasExtension, None));
        assert_eq!(
            "[\n{T, q}\n{T, p}\n]\n",
            answer_of(Question::AllExtensions, None)
        );
        assert_eq!("YES\n", answer_of(Question::CredulousEntail, Some("p")));
        assert_eq!("NO\n", answer_of(Question::SkepticalEntail, Some("p")));
    }

    #[test]
    fn test_json_answers() {
        assert_eq!(
            "{\"error\":false,\"value\":[[\"T\",\"q\"],[\"T\",\"p\"]]}\n",
            envelope_of("all_extensions", None)
        );
        assert_eq!(
            "{\"error\":false,\"value\":true}\n",
            envelope_of("not_skeptical_entail", Some("q"))
        );
        assert_eq!(
            "{\"error\":true,\"value\":\"while answering \\\"why\\\": unknown question \\\"why\\\"\"}\n",
            envelope_of("why", None)
        );
    }
}
