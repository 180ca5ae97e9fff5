use super::{CategoryDescriptions, LocaleTable};

pub static KO: LocaleTable = LocaleTable {
    descriptions: CategoryDescriptions {
        love: [
            "오늘은 별들이 당신의 마음을 향해 정렬합니다. 뜻밖의 순간에 소중한 인연이 깊어지거나 시작될 수 있어요.",
            "연애운이 술술 풀립니다. 당신의 따뜻함이 사람을 끌어당기고, 진심 어린 말이 환영받을 거예요.",
            "설렘이 가득한 하루입니다. 작은 표현이 큰 의미를 가지니 마음을 드러내 보세요.",
            "당신의 매력이 빛나고 있어요. 오늘의 대화에서 누군가의 진심을 확인할 수 있습니다.",
            "사랑이 가볍고 즐겁게 느껴집니다. 함께 웃는 시간이 특별한 사람과의 거리를 좁혀 줘요.",
            "관계에 부드럽고 희망찬 기운이 감돕니다. 인내가 호감을 믿음으로 바꿔 줄 거예요.",
            "좋은 감정이 천천히 쌓이고 있어요. 솔직한 태도를 유지하면 나머지는 자연스럽게 따라옵니다.",
            "마음이 열려 있고 안정적입니다. 거창한 계획보다 함께하는 조용한 시간이 더 소중해요.",
            "연애운은 잔잔하지만 기분 좋습니다. 더 많은 것을 바라기 전에 지금의 좋은 것에 감사하세요.",
            "오늘의 사랑은 균형을 이룹니다. 서두르지도 물러서지도 말고 그 자리에 있어 주세요.",
            "상대의 마음을 읽기 어려울 수 있어요. 짐작하기보다 물어보고 대답에 귀 기울이세요.",
            "엇갈린 신호가 보일 수 있습니다. 상대에게 여유를 주고 성급한 결론은 피하세요.",
            "마음이 조금 흐릴 수 있어요. 다른 사람을 걱정하기 전에 자신을 먼저 돌보세요.",
            "오해가 생기기 쉬운 날입니다. 말을 신중하게 고르고 부드러운 어조를 유지하세요.",
            "연애 기운이 약합니다. 큰 고백보다는 스스로를 돌아보는 날로 삼으세요.",
            "지난 서운함이 다시 떠오를 수 있어요. 이미 정리된 다툼은 다시 꺼내지 마세요.",
            "감정은 격해지고 인내심은 짧아집니다. 반응하기 전에 한 걸음 물러서세요.",
            "오늘은 사랑이 멀게 느껴집니다. 대신 우정과 자신의 편안함에 집중하세요.",
            "마음의 일에 먹구름이 끼어 있어요. 관계에 관한 중요한 결정은 미루세요.",
            "별들이 마음을 쉬게 하라고 말합니다. 내일은 더 맑은 하늘이 기다려요.",
        ],
        money: [
            "재물운이 활짝 웃습니다. 뜻밖의 수입이나 현명한 기회가 찾아올 수 있어요.",
            "금전 기운이 강합니다. 판단력이 날카로우니 충분히 알아본 결정을 믿으세요.",
            "돈 문제가 순조롭게 풀립니다. 작은 노력이 큰 보상으로 돌아올 수 있어요.",
            "풍요가 손에 닿을 듯합니다. 실용적인 제안이나 유용한 정보에 주목하세요.",
            "재정이 안정적이고 밝습니다. 장기 목표를 세우기 좋은 날이에요.",
            "꾸준한 이익이 기대됩니다. 오늘은 투기보다 꾸준함이 이깁니다.",
            "돈이 편안한 속도로 흐릅니다. 최근의 노력에 소소한 보상을 주세요.",
            "오늘의 현명한 선택이 내일의 안정을 만듭니다. 차분히 예산을 점검하세요.",
            "재정 상태는 무난합니다. 큰 변화는 없지만 꼼꼼한 관리가 앞서가게 해 줘요.",
            "수입과 지출이 균형을 이룹니다. 지금의 방향을 유지하고 충동구매는 피하세요.",
            "작은 곳에서 돈이 새어 나갈 수 있어요. 구독료와 사소한 지출을 살펴보세요.",
            "솔깃한 거래가 보이는 것과 다를 수 있어요. 세부 조건을 두 번 읽으세요.",
            "금전 판단이 흐릿합니다. 가능하다면 큰 구매는 미루세요.",
            "예상치 못한 지출이 생길 수 있어요. 여유 자금을 남기고 오늘은 돈을 빌려주지 마세요.",
            "소비 감각이 믿음직하지 않습니다. 돈과 관련된 결정은 하룻밤 생각해 보세요.",
            "서두르다 손해를 볼 수 있어요. 속도를 늦추고 모든 거래를 다시 확인하세요.",
            "돈 걱정이 무겁게 느껴질 수 있어요. 통제할 수 있는 것에 집중하고 간단한 계획을 세우세요.",
            "재물의 바람이 역풍입니다. 더 얻으려 하기보다 가진 것을 지키세요.",
            "오늘은 어떤 금전적 위험도 피하세요. 인내가 가장 큰 자산입니다.",
            "별들이 지출을 완전히 멈추라고 조언합니다. 지갑에 더 좋은 날이 곧 옵니다.",
        ],
        study: [
            "머리가 놀랄 만큼 맑습니다. 어려운 내용도 쉽게 이해될 거예요.",
            "오늘은 집중이 자연스럽게 됩니다. 시험, 발표, 깊은 공부에 아주 좋은 때예요.",
            "배움이 보람차게 느껴집니다. 아이디어가 빠르게 연결되고 기억력도 좋아요.",
            "호기심이 강력한 원동력이 됩니다. 새로운 주제를 탐구하면 통찰을 얻을 거예요.",
            "집중력이 강합니다. 미뤄 왔던 과제를 해결해 보세요.",
            "꾸준히 진전이 있습니다. 아는 것을 복습하고 자신 있게 쌓아 올리세요.",
            "연습하기 좋은 날입니다. 지금의 반복이 내일의 도전을 쉽게 만들어 줘요.",
            "이해가 깊어지고 있어요. 누군가에게 개념을 설명하면 더 확실해집니다.",
            "공부가 편안한 속도로 진행됩니다. 짧고 집중된 시간이 가장 효과적이에요.",
            "주의력이 균형을 이룹니다. 복습과 새 내용을 섞어 흥미를 유지하세요.",
            "주의가 흐트러지기 쉬워요. 휴대폰을 치우고 분명한 목표를 세우세요.",
            "어떤 개념은 잘 풀리지 않을 수 있어요. 잠시 쉬었다가 새로운 눈으로 다시 보세요.",
            "의욕이 들쭉날쭉합니다. 가장 쉬운 과제부터 시작해 흐름을 만드세요.",
            "실수가 나오기 쉬운 날이에요. 제출하기 전에 꼭 검토하세요.",
            "집중이 흩어집니다. 새로운 것을 배우기보다 노트를 정리하세요.",
            "답답함이 진도를 막을 수 있어요. 혼자 씨름하지 말고 도움을 청하세요.",
            "머리가 피곤하기 쉽습니다. 휴식도 공부의 일부이니 거르지 마세요.",
            "오늘은 잘 기억되지 않을 수 있어요. 벼락치기보다 가벼운 복습이 낫습니다.",
            "가능하다면 중요한 시험은 피하세요. 조용히 준비하며 맑은 날을 기다리세요.",
            "별들이 오늘은 책을 덮으라고 말합니다. 푹 쉰 머리가 내일 더 빨리 배워요.",
        ],
        social: [
            "오늘은 사람들이 당신에게 끌립니다. 당신이 있는 곳마다 분위기가 밝아져요.",
            "인연이 꽃핍니다. 새로운 만남이 중요한 조력자가 될 수 있어요.",
            "당신의 말에 따뜻함과 무게가 실립니다. 관계를 회복하거나 다지기 좋은 날이에요.",
            "협동이 빛을 발합니다. 함께할 때 모두의 장점이 드러나요.",
            "친구들이 기쁨과 좋은 소식을 가져옵니다. 초대에 응해 보세요.",
            "당신의 친절이 알려지고 돌아옵니다. 작은 호의가 오래가는 신뢰를 쌓아요.",
            "대화가 술술 풀립니다. 한동안 연락하지 못한 사람에게 먼저 연락해 보세요.",
            "관계가 안정적이고 든든합니다. 믿는 사람들과 계획을 나눠 보세요.",
            "사교 생활이 즐겁습니다. 함께하는 소소한 시간이 힘을 줘요.",
            "관계가 균형을 이룹니다. 받는 만큼 주면 모든 것이 순조로워요.",
            "누군가 당신의 의도를 오해할 수 있어요. 분명하고 솔직하게 말하세요.",
            "모임 분위기가 팽팽할 수 있습니다. 중립을 지키고 편을 들지 마세요.",
            "다른 사람들과 조금 엇박자가 날 수 있어요. 말하기보다 들으세요.",
            "소문이나 뒷말이 문제를 일으킬 수 있어요. 비밀을 지키고 신중하세요.",
            "다른 사람에 대한 인내심이 부족해집니다. 오늘은 조용한 만남을 택하세요.",
            "의견 충돌이 생길 수 있어요. 평화를 위해 사소한 일은 넘기세요.",
            "오해가 생기기 쉽습니다. 중요한 대화는 글로 남기세요.",
            "외로움을 느낄 수 있어요. 여러 사람보다 믿을 만한 친구 한 명에게 연락하세요.",
            "관계의 마찰이 큽니다. 약속은 간단하게, 부담은 가볍게 하세요.",
            "별들이 오늘은 혼자만의 시간을 권합니다. 하늘이 개면 다시 연결하세요.",
        ],
    },
    advice: [
        "이 순간을 잡으세요. 흔치 않은 눈부신 날입니다.",
        "행운을 나누면 더 커집니다.",
        "직감을 믿고 자신 있게 행동하세요.",
        "큰 목표를 세우고 오늘 첫걸음을 떼세요.",
        "도움을 준 사람에게 감사를 표현하세요.",
        "꾸준한 노력으로 흐름을 이어 가세요.",
        "익숙한 영역에서 조금 벗어나 보세요.",
        "미리 계획하세요. 오늘의 준비가 나중에 보답합니다.",
        "소소한 즐거움을 누리고 뜻밖의 일에 열린 마음을 가지세요.",
        "일과 휴식의 균형으로 에너지를 고르게 유지하세요.",
        "한 번에 한 걸음씩 나아가세요.",
        "짐작하기 전에 먼저 물어보세요.",
        "작은 성취에 집중해 기분을 끌어올리세요.",
        "일정은 가볍게, 마음은 유연하게 유지하세요.",
        "믿을 수 있는 사람에게 기대세요.",
        "통제할 수 없는 것은 내려놓으세요.",
        "휴식과 편안한 일상을 우선하세요.",
        "걱정을 적어 본 뒤 잠시 내려두세요.",
        "집에서 따뜻하게 지내며 자신에게 친절하세요.",
        "푹 쉬세요. 썰물은 언젠가 밀물이 됩니다.",
    ],
    caution: [
        "자만으로 방심하지 마세요.",
        "자랑은 피하세요. 겸손이 행운을 지켜 줍니다.",
        "지나친 약속을 조심하세요.",
        "들뜬 마음에 작은 부분을 놓치지 마세요.",
        "축하하다가 과소비하지 않도록 주의하세요.",
        "남과 비교하지 마세요.",
        "시간이 필요한 결정을 서두르지 마세요.",
        "감정이 격해질 때 말을 조심하세요.",
        "쓸데없는 뒷말을 경계하세요.",
        "시간을 너무 많이 약속하지 마세요.",
        "사소한 오해를 조심하세요.",
        "낯선 제안은 신중하게 대하세요.",
        "식사와 잠을 거르지 마세요.",
        "돈이나 귀중품을 빌려주지 마세요.",
        "일정과 약속을 다시 확인하세요.",
        "이길 수 없는 논쟁은 피하세요.",
        "날카로운 물건과 교통에 주의하세요.",
        "되돌릴 수 없는 선택은 오늘 하지 마세요.",
        "어떤 위험한 계획도 피하세요.",
        "무리하지 마세요. 내일은 또 다른 날입니다.",
    ],
    tags: [
        &["#대박", "#눈부심", "#운명", "#축복", "#거침없음"],
        &["#행운", "#황금", "#빛남", "#승리", "#마법"],
        &["#환함", "#자신감", "#번영", "#조화", "#반짝임"],
        &["#매력", "#성공", "#광채", "#상승세", "#명랑"],
        &["#화창", "#긍정", "#유망", "#기쁨", "#성장"],
        &["#꾸준함", "#희망", "#친절", "#전진", "#미소"],
        &["#기분좋음", "#다정함", "#따뜻함", "#열린마음", "#부드러움"],
        &["#차분함", "#안정", "#인내", "#맑음", "#사려깊음"],
        &["#무난", "#여유", "#단순함", "#평화", "#느긋함"],
        &["#균형", "#중립", "#고요", "#중심", "#적당함"],
        &["#조심", "#마음챙김", "#호기심", "#조용함", "#성찰"],
        &["#신중", "#불확실", "#흔들림", "#경계", "#혼조"],
        &["#흐림", "#안개", "#느림", "#표류", "#뿌연하늘"],
        &["#현명함", "#방어", "#굳건함", "#주의", "#회복력"],
        &["#도전", "#버팀", "#끈기", "#시험", "#근성"],
        &["#험난", "#울퉁불퉁", "#피곤", "#초조", "#바람"],
        &["#폭풍", "#격동", "#긴장", "#무거움", "#대비"],
        &["#시련", "#고난", "#인내심", "#피난처", "#버티기"],
        &["#그림자", "#우울", "#후퇴", "#휴식", "#멈춤"],
        &["#리셋", "#재충전", "#새벽", "#새출발", "#내일"],
    ],
};
