use super::{CategoryDescriptions, LocaleTable};

pub static EN: LocaleTable = LocaleTable {
    descriptions: CategoryDescriptions {
        love: [
            "The stars align for your heart today. A meaningful connection could deepen or begin when you least expect it.",
            "Romance flows easily. Your warmth draws people in, and a sincere word will be received with open arms.",
            "Affection is in the air. Small gestures carry big meaning, so let your feelings show.",
            "Your charm is shining. A conversation today may reveal how much someone cares about you.",
            "Love feels light and playful. Shared laughter brings you closer to someone special.",
            "A gentle, promising energy surrounds your relationships. Patience turns interest into trust.",
            "Good feelings are building slowly. Keep showing up with honesty and the rest will follow.",
            "Your heart is open and steady. A quiet moment together means more than a grand plan.",
            "Romance is calm but pleasant. Appreciate what is already good before looking for more.",
            "Love sits in balance today. Neither rush nor retreat; simply be present.",
            "Feelings may be hard to read. Ask rather than assume, and listen closely to the answer.",
            "Mixed signals could appear. Give the other person room and avoid jumping to conclusions.",
            "Your heart may feel a little clouded. Take care of yourself before worrying about others.",
            "Misunderstandings are possible. Choose your words carefully and keep your tone soft.",
            "Romantic energy is low. This is a day for reflection, not for big confessions.",
            "Old frustrations may resurface. Let them pass without reopening settled arguments.",
            "Emotions run high and patience runs short. Step back before reacting.",
            "Love feels distant today. Focus on friendships and your own comfort instead.",
            "Clouds hang over matters of the heart. Avoid important decisions about relationships.",
            "The stars ask you to rest your heart. Tomorrow brings a clearer sky.",
        ],
        money: [
            "Fortune smiles on your wallet. An unexpected gain or a wise opportunity may come your way.",
            "Financial energy is strong. Your judgment is sharp, so trust a well-researched decision.",
            "Money matters move smoothly. A small investment of effort could pay back handsomely.",
            "Prosperity is within reach. Keep an eye out for a practical offer or useful tip.",
            "Your finances feel stable and bright. A good day to plan a long-term goal.",
            "Steady gains are likely. Consistency beats speculation today.",
            "Money flows at a comfortable pace. Reward yourself modestly for recent hard work.",
            "A sensible choice today builds security for tomorrow. Review your budget calmly.",
            "Finances are fair. Nothing dramatic, but careful tracking keeps you ahead.",
            "Income and spending are in balance. Hold your course and avoid impulse buys.",
            "Money may slip away in small ways. Watch subscriptions and little expenses.",
            "A tempting deal might not be what it seems. Read the fine print twice.",
            "Financial clarity is limited. Postpone large purchases if you can.",
            "Unexpected costs could appear. Keep a cushion and avoid lending money today.",
            "Your spending instincts are unreliable. Sleep on any decision involving money.",
            "Losses are possible through haste. Slow down and double-check every transaction.",
            "Money worries may feel heavy. Focus on what you can control and make a simple plan.",
            "Financial winds blow against you. Protect what you have rather than chasing more.",
            "Avoid risks of any kind with money today. Patience is your best asset.",
            "The stars advise a full pause on spending. Better days for your wallet are ahead.",
        ],
        study: [
            "Your mind is brilliantly clear. Difficult material clicks into place with surprising ease.",
            "Focus comes naturally today. An excellent time for exams, presentations, or deep work.",
            "Learning feels rewarding. Ideas connect quickly, and your memory serves you well.",
            "Your curiosity is a powerful engine. Explore a new topic and you will find insight.",
            "Concentration is strong. Tackle the task you have been putting off.",
            "Progress comes steadily. Review what you know and build on it confidently.",
            "A good day for practice. Repetition now makes tomorrow's challenges easier.",
            "Your understanding is deepening. Explaining a concept to someone will sharpen it further.",
            "Study goes at a comfortable pace. Short, focused sessions work best.",
            "Your attention is balanced. Mix review with new material to stay engaged.",
            "Distractions may tug at you. Put your phone away and set a clear goal.",
            "Some concepts may feel stubborn. Take a break and come back with fresh eyes.",
            "Motivation is uneven today. Start with the easiest task to build momentum.",
            "Careless mistakes are possible. Check your work before handing it in.",
            "Your focus is scattered. Organize your notes rather than learning something new.",
            "Frustration could block progress. Ask for help instead of struggling alone.",
            "Mental fatigue is likely. Rest is part of learning, so do not skip it.",
            "Little seems to stick today. Light review is better than cramming.",
            "Avoid high-stakes tests if you can. Prepare quietly and wait for a clearer day.",
            "The stars suggest closing the books for now. A rested mind learns faster tomorrow.",
        ],
        social: [
            "People are drawn to you today. Your presence lifts every room you enter.",
            "Connections flourish. A new acquaintance could become an important ally.",
            "Your words carry warmth and weight. A great day to mend or strengthen a bond.",
            "Teamwork shines. Collaborating brings out the best in everyone involved.",
            "Friends bring joy and good news. Say yes to an invitation.",
            "Your kindness is noticed and returned. Small favors build lasting trust.",
            "Conversations flow easily. Reach out to someone you have not talked to in a while.",
            "Relationships feel steady and supportive. Share your plans with people you trust.",
            "Social life is pleasant. Simple time together recharges you.",
            "Interactions are balanced. Give as much as you take and all will be well.",
            "Someone may misread your intentions. Be clear and direct.",
            "Group dynamics could feel tense. Stay neutral and avoid taking sides.",
            "You may feel slightly out of sync with others. Listen more than you speak.",
            "Gossip or rumors could cause trouble. Keep confidences and stay discreet.",
            "Patience with others runs thin. Choose quiet company today.",
            "A disagreement may flare up. Let small things go for the sake of peace.",
            "Misunderstandings are likely. Put important conversations in writing.",
            "You may feel isolated. Reach out to one trusted friend rather than a crowd.",
            "Social friction is high. Keep plans simple and commitments light.",
            "The stars advise solitude today. Recharge and reconnect when the sky clears.",
        ],
    },
    advice: [
        "Seize the moment; this is a rare and radiant day.",
        "Share your good fortune and it will multiply.",
        "Trust your instincts and act with confidence.",
        "Set an ambitious goal and take the first step today.",
        "Express gratitude to someone who helped you.",
        "Keep your momentum going with steady effort.",
        "Try something slightly outside your comfort zone.",
        "Plan ahead; today's groundwork pays off later.",
        "Enjoy simple pleasures and stay open to surprises.",
        "Balance work and rest to keep your energy even.",
        "Take things one step at a time.",
        "Ask questions before making assumptions.",
        "Focus on small wins to lift your mood.",
        "Keep your schedule light and your mind flexible.",
        "Lean on people you trust.",
        "Let go of what you cannot control.",
        "Prioritize rest and gentle routines.",
        "Write down your worries, then set them aside.",
        "Stay indoors, stay warm, and be kind to yourself.",
        "Rest deeply; every low tide turns.",
    ],
    caution: [
        "Do not let overconfidence make you careless.",
        "Avoid boasting; humility keeps luck close.",
        "Watch out for promising too much.",
        "Don't overlook small details in your excitement.",
        "Be careful not to overspend while celebrating.",
        "Avoid comparing yourself to others.",
        "Don't rush a decision that deserves time.",
        "Be mindful of your words in heated moments.",
        "Beware of idle gossip.",
        "Avoid overcommitting your time.",
        "Watch for minor misunderstandings.",
        "Be cautious with unfamiliar offers.",
        "Don't skip meals or sleep.",
        "Avoid lending money or valuables.",
        "Double-check schedules and appointments.",
        "Avoid arguments you cannot win.",
        "Be careful with sharp objects and traffic.",
        "Don't make irreversible choices today.",
        "Avoid risky plans of any kind.",
        "Don't push yourself; tomorrow is another day.",
    ],
    tags: [
        &["#Jackpot", "#Radiant", "#Destiny", "#Blessed", "#Unstoppable"],
        &["#Lucky", "#Golden", "#Shining", "#Triumph", "#Magic"],
        &["#Bright", "#Confident", "#Flourish", "#Harmony", "#Spark"],
        &["#Charm", "#Success", "#Glow", "#Momentum", "#Cheerful"],
        &["#Sunny", "#Upbeat", "#Promising", "#Joy", "#Growth"],
        &["#Steady", "#Hopeful", "#Kindness", "#Progress", "#Smile"],
        &["#Pleasant", "#Friendly", "#Warm", "#Open", "#Gentle"],
        &["#Calm", "#Grounded", "#Patient", "#Clear", "#Thoughtful"],
        &["#Fair", "#Easygoing", "#Simple", "#Peaceful", "#Relaxed"],
        &["#Balance", "#Neutral", "#Even", "#Centered", "#Moderate"],
        &["#Careful", "#Mindful", "#Curious", "#Quiet", "#Reflective"],
        &["#Cautious", "#Uncertain", "#Wavering", "#Watchful", "#Mixed"],
        &["#Cloudy", "#Foggy", "#Slow", "#Drifting", "#Hazy"],
        &["#Prudent", "#Guarded", "#Steadfast", "#Alert", "#Resilient"],
        &["#Challenge", "#Endure", "#Persist", "#Test", "#Grit"],
        &["#Rough", "#Bumpy", "#Tired", "#Restless", "#Windy"],
        &["#Stormy", "#Turbulent", "#Tense", "#Heavy", "#Brace"],
        &["#Trial", "#Hardship", "#Patience", "#Shelter", "#Hold"],
        &["#Shadow", "#Gloomy", "#Retreat", "#Rest", "#Pause"],
        &["#Reset", "#Recharge", "#Dawn", "#Renewal", "#Tomorrow"],
    ],
};
